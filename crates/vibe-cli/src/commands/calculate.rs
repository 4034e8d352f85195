use anyhow::Context;
use vibe_config::VibeConfig;
use vibe_core::MatchCalculator;
use vibe_core::catalog::prepare_catalog;
use vibe_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CalculateArgs;
use crate::commands::input::load_session;
use crate::output::output;

/// Handle `vibe calculate`: score without the readiness gate. Empty inputs
/// fail with the calculator's error.
pub fn handle(args: &CalculateArgs, config: &VibeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = load_session(&args.file)?;
    let calculator = MatchCalculator::with_messages(config.fallback_messages()?);

    let catalog = prepare_catalog(session.catalog.iter().cloned());
    let result = calculator
        .calculate(
            &session.responses_for(Role::Host),
            &session.responses_for(Role::Guest),
            &catalog,
        )
        .with_context(|| format!("cannot score session '{}'", session.session_id))?;

    output(&result, flags)
}
