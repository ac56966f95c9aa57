//! CLI presentation: text and json formatters per command.

mod listing;
mod provision;
mod value;

pub use listing::{
    format_keys_output, format_list_json_output, format_list_table_output, format_result_count,
};
pub use provision::{format_provisioning_command, format_provisioning_commands, quote_for_shell};
pub use value::format_value_output;
