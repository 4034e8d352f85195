use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check whether both participants have answered enough questions.
    Validate(SessionFileArgs),
    /// Score a session directly, without the readiness gate.
    Calculate(CalculateArgs),
    /// Validate, then score if both participants are done.
    Evaluate(SessionFileArgs),
    /// Print a JSON schema, or list the available schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SessionFileArgs {
    /// Session JSON file (`-` reads stdin)
    pub file: String,
    /// Responses required per participant (defaults to active catalog size)
    #[arg(short, long)]
    pub expected: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct CalculateArgs {
    /// Session JSON file (`-` reads stdin)
    pub file: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `match_result`. Omit to list names.
    pub type_name: Option<String>,
}
