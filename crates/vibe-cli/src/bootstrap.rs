use std::path::Path;

use anyhow::Context;
use vibe_config::VibeConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (if any) and the layered config, honoring `--config`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VibeConfig> {
    let explicit = flags.config.as_deref().map(Path::new);
    if let Some(path) = explicit {
        anyhow::ensure!(
            path.is_file(),
            "invalid --config '{}': file does not exist",
            path.display()
        );
    }

    let config = VibeConfig::load_with_dotenv(explicit).context("failed to load vibe configuration")?;
    tracing::debug!(
        expected_questions = ?config.validation.expected_questions,
        "configuration loaded"
    );
    Ok(config)
}
