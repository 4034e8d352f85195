use vibe_config::VibeConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &VibeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => commands::validate::handle(&args, config, flags),
        Commands::Calculate(args) => commands::calculate::handle(&args, config, flags),
        Commands::Evaluate(args) => commands::evaluate::handle(&args, config, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
