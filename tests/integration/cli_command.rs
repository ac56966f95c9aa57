//! Integration tests for `pstore cli`

use crate::integration::{context_with, quiet_options};
use pstore::cli::{Commands, RunOptions};
use pstore::filter::FilterMode;
use pstore::types::{ParameterKind, Record};

#[test]
fn test_single_record_command_text() {
    let ctx = context_with(
        quiet_options(FilterMode::None),
        vec![Record::new("/x", "y", ParameterKind::SecureString, 1)],
    );
    let output = ctx.execute(&Commands::Cli { path: None }).unwrap();
    assert_eq!(
        output,
        "aws ssm put-parameter \\\n    --profile default \\\n    --name \"/x\" \\\n    --type SecureString \\\n    --value \"y\" \\\n    --overwrite \\\n;\n\n"
    );
}

#[test]
fn test_profile_flag_is_substituted() {
    let options = RunOptions {
        profile: Some("prod".to_string()),
        ..quiet_options(FilterMode::None)
    };
    let ctx = context_with(options, vec![Record::new("/x", "y", ParameterKind::String, 1)]);
    let output = ctx.execute(&Commands::Cli { path: None }).unwrap();
    assert!(output.contains("--profile prod \\\n"));
    assert!(output.contains("--type String \\\n"));
}

#[test]
fn test_commands_are_filtered_and_sorted() {
    let ctx = context_with(
        quiet_options(FilterMode::Regex("^/app/".to_string())),
        vec![
            Record::new("/app/z", "1", ParameterKind::String, 1),
            Record::new("/web/a", "2", ParameterKind::String, 1),
            Record::new("/app/a", "3", ParameterKind::String, 1),
        ],
    );
    let output = ctx.execute(&Commands::Cli { path: None }).unwrap();
    let names: Vec<&str> = output
        .lines()
        .filter(|l| l.trim_start().starts_with("--name"))
        .collect();
    assert_eq!(
        names,
        vec!["    --name \"/app/a\" \\", "    --name \"/app/z\" \\"]
    );
}

#[test]
fn test_no_records_no_output() {
    let ctx = context_with(quiet_options(FilterMode::None), Vec::new());
    assert_eq!(ctx.execute(&Commands::Cli { path: None }).unwrap(), "");
}
