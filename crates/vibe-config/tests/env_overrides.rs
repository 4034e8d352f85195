use figment::Jail;
use vibe_config::VibeConfig;

#[test]
fn env_sets_expected_questions() {
    Jail::expect_with(|jail| {
        jail.set_env("VIBE_VALIDATION__EXPECTED_QUESTIONS", "12");

        let config = VibeConfig::load().expect("config loads");
        assert_eq!(config.validation.expected_questions, Some(12));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vibe")?;
        jail.create_file(
            ".vibe/config.toml",
            "[messages]\nboth_chose_nothing = \"from file\"\n",
        )?;
        jail.set_env("VIBE_MESSAGES__BOTH_CHOSE_NOTHING", "from env");

        let config = VibeConfig::load().expect("config loads");
        assert_eq!(config.messages.both_chose_nothing, "from env");
        Ok(())
    });
}

#[test]
fn unrelated_vibe_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("VIBE_LOG", "debug");

        let config = VibeConfig::load().expect("config loads");
        assert!(config.validation.expected_questions.is_none());
        Ok(())
    });
}
