use vibe_config::VibeConfig;
use vibe_core::evaluation::check_session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionFileArgs;
use crate::commands::input::{expected_override, load_session};
use crate::output::output;

/// Handle `vibe validate`. A not-ready session is a normal result, not an error.
pub fn handle(args: &SessionFileArgs, config: &VibeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = load_session(&args.file)?;
    let response = check_session(&session, expected_override(args.expected, config));
    output(&response, flags)
}
