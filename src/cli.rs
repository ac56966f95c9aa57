//! CLI domain: parse, route, help, output, and presentation only.
//! No fetching or filtering logic lives here; the route table dispatches to it.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, MISSING_KEY_MESSAGE};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_keys_output, format_list_json_output, format_list_table_output,
    format_provisioning_command, format_provisioning_commands, format_result_count,
    format_value_output, quote_for_shell,
};
pub use route::{RunContext, RunOptions};
