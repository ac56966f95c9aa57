//! `get` presentation: the bare value.

use crate::types::Record;

pub fn format_value_output(record: &Record) -> String {
    format!("{}\n", record.value)
}
