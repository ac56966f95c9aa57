//! CLI help and command-name contract for logging and debug echo.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "list", "get").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Cli { .. } => "cli",
        Commands::Get { .. } => "get",
    }
}

/// Positional arguments as typed, for the `--debug` argument dump.
pub fn command_arguments(command: &Commands) -> Vec<String> {
    match command {
        Commands::List { path, .. } | Commands::Cli { path } => path.iter().cloned().collect(),
        Commands::Get { key } => key.iter().cloned().collect(),
    }
}

/// Shown when `get` is called without a key.
pub const MISSING_KEY_MESSAGE: &str = "The path to the Parameter Store key is mandatory. \
If you don't know the path, try `pstore list` first.";
