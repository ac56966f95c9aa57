//! `list` presentation: table, keys-only, and JSON.

use crate::error::PstoreError;
use crate::types::Record;
use comfy_table::{CellAlignment, Table};
use serde_json::json;

/// "1 result matched." / "N results matched."
pub fn format_result_count(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{} {} matched.", count, noun)
}

/// Two-column Key/Value table, a blank line, then the count line.
/// An empty set prints only the count line.
pub fn format_list_table_output(records: &[Record]) -> String {
    let mut out = String::new();
    if !records.is_empty() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.set_header(vec!["Key", "Value"]);
        for r in records {
            table.add_row(vec![r.key.as_str(), r.value.as_str()]);
        }
        for column in table.column_iter_mut() {
            column.set_cell_alignment(CellAlignment::Left);
        }
        out.push_str(&format!("{}\n\n", table));
    }
    out.push_str(&format_result_count(records.len()));
    out.push('\n');
    out
}

/// One key per line, a blank line, then the count line.
pub fn format_keys_output(records: &[Record]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&r.key);
        out.push('\n');
    }
    if !records.is_empty() {
        out.push('\n');
    }
    out.push_str(&format_result_count(records.len()));
    out.push('\n');
    out
}

/// `{ "parameters": [...], "total": N }`, including type and version.
pub fn format_list_json_output(records: &[Record]) -> Result<String, PstoreError> {
    let out = json!({ "parameters": records, "total": records.len() });
    let mut text = serde_json::to_string_pretty(&out)?;
    text.push('\n');
    Ok(text)
}
