//! `cli` presentation: one `aws ssm put-parameter` command per record.

use crate::types::Record;

/// Escape text for use inside a double-quoted shell word.
pub fn quote_for_shell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A single provisioning command, ending with `;` and a newline.
pub fn format_provisioning_command(profile: &str, record: &Record) -> String {
    format!(
        "aws ssm put-parameter \\\n    --profile {} \\\n    --name \"{}\" \\\n    --type {} \\\n    --value \"{}\" \\\n    --overwrite \\\n;\n",
        profile,
        quote_for_shell(&record.key),
        record.kind.as_str(),
        quote_for_shell(&record.value),
    )
}

/// Every command followed by one blank line. Empty input yields empty output.
pub fn format_provisioning_commands(profile: &str, records: &[Record]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n", format_provisioning_command(profile, r)))
        .collect()
}
