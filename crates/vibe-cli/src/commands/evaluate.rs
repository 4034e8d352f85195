use anyhow::Context;
use vibe_config::VibeConfig;
use vibe_core::MatchCalculator;
use vibe_core::evaluation::evaluate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionFileArgs;
use crate::commands::input::{expected_override, load_session};
use crate::output::output;

/// Handle `vibe evaluate`.
pub fn handle(args: &SessionFileArgs, config: &VibeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = load_session(&args.file)?;
    let calculator = MatchCalculator::with_messages(config.fallback_messages()?);

    let evaluation = evaluate(&session, expected_override(args.expected, config), &calculator)
        .with_context(|| format!("cannot evaluate session '{}'", session.session_id))?;

    output(&evaluation.into_response(session.session_id), flags)
}
