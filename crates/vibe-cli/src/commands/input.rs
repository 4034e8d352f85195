use std::io::Read;
use std::path::Path;

use anyhow::Context;
use vibe_core::entities::SessionInput;
use vibe_schema::SchemaRegistry;

/// Read a session file (or stdin for `-`), check it against the
/// `session_input` schema, then deserialize it.
pub fn load_session(file: &str) -> anyhow::Result<SessionInput> {
    let raw = if file == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read session from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(file))
            .with_context(|| format!("failed to read session file '{file}'"))?
    };

    parse_session(&raw).with_context(|| format!("invalid session input '{file}'"))
}

pub fn parse_session(raw: &str) -> anyhow::Result<SessionInput> {
    let value: serde_json::Value = serde_json::from_str(raw).context("not valid JSON")?;
    SchemaRegistry::new()?.validate("session_input", &value)?;
    let session: SessionInput = serde_json::from_value(value)?;

    tracing::debug!(
        session_id = %session.session_id,
        questions = session.catalog.len(),
        responses = session.responses.len(),
        "session loaded"
    );
    Ok(session)
}

/// `--expected` wins over `validation.expected_questions` from config.
pub fn expected_override(cli: Option<usize>, config: &vibe_config::VibeConfig) -> Option<usize> {
    cli.or(config.validation.expected_questions)
}
