//! Integration tests for `pstore list`

use crate::integration::{context_with, context_with_source, quiet_options, record};
use pstore::cli::{Commands, RunOptions};
use pstore::error::PstoreError;
use pstore::filter::FilterMode;
use pstore::source::MemorySource;
use pstore::types::{Page, ParameterKind, Record};

fn list(path: Option<&str>) -> Commands {
    Commands::List {
        path: path.map(str::to_string),
        keys: false,
        format: "text".to_string(),
    }
}

/// Key column of a rendered table. Borders are `│`, column separators `┆`.
fn table_keys(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            line.split(['│', '┆'])
                .map(str::trim)
                .find(|cell| cell.starts_with('/'))
                .map(str::to_string)
        })
        .collect()
}

#[test]
fn test_pages_are_aggregated_then_sorted() {
    let source = MemorySource::new(vec![
        Page::new(vec![record("/z", "v1")]),
        Page::new(vec![record("/a", "v2")]),
    ]);
    let ctx = context_with_source(quiet_options(FilterMode::None), source);

    let output = ctx.execute(&list(None)).unwrap();
    assert_eq!(table_keys(&output), vec!["/a", "/z"]);
    assert!(output.ends_with("2 results matched.\n"));
}

#[test]
fn test_substring_filter_end_to_end() {
    let ctx = context_with(
        quiet_options(FilterMode::Substring("db".to_string())),
        vec![record("/app/db", "secret"), record("/app/cache", "redis")],
    );

    let output = ctx.execute(&list(Some("/app"))).unwrap();
    assert_eq!(table_keys(&output), vec!["/app/db"]);
    assert!(output.contains("secret"));
    assert!(!output.contains("redis"));
    assert!(output.ends_with("1 result matched.\n"));
}

#[test]
fn test_zero_matches_is_not_an_error() {
    let ctx = context_with(
        quiet_options(FilterMode::Regex("^/nothing".to_string())),
        vec![record("/app/db", "secret")],
    );
    let output = ctx.execute(&list(None)).unwrap();
    assert_eq!(output, "0 results matched.\n");
}

#[test]
fn test_invalid_regex_is_fatal() {
    let ctx = context_with(
        quiet_options(FilterMode::Regex("(unclosed".to_string())),
        vec![record("/app/db", "secret")],
    );
    let err = ctx.execute(&list(None)).unwrap_err();
    assert!(matches!(err, PstoreError::InvalidPattern(_)));
}

#[test]
fn test_page_failure_prints_nothing() {
    let source = MemorySource::new(vec![
        Page::new(vec![record("/a", "1")]),
        Page::new(vec![record("/b", "2")]),
    ])
    .failing_after(1, "AccessDeniedException: not authorized");
    let ctx = context_with_source(quiet_options(FilterMode::None), source);

    let err = ctx.execute(&list(None)).unwrap_err();
    assert!(matches!(err, PstoreError::PartialPageFailure { pages: 1, .. }));
    assert!(err.to_string().contains("AccessDeniedException"));
}

#[test]
fn test_path_limits_listing() {
    let ctx = context_with(
        quiet_options(FilterMode::None),
        vec![record("/app/db", "1"), record("/web/db", "2")],
    );
    let output = ctx.execute(&list(Some("/web"))).unwrap();
    assert_eq!(table_keys(&output), vec!["/web/db"]);
}

#[test]
fn test_keys_only_filters_on_key() {
    let ctx = context_with(
        quiet_options(FilterMode::Substring("secret".to_string())),
        vec![record("/app/db", "secret"), record("/app/secret", "x")],
    );
    let output = ctx
        .execute(&Commands::List {
            path: None,
            keys: true,
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(output, "/app/secret\n\n1 result matched.\n");
}

#[test]
fn test_json_keys_listing_matches_printed_values() {
    let ctx = context_with(
        quiet_options(FilterMode::Substring("secret".to_string())),
        vec![record("/a", "secret"), record("/b", "plain")],
    );
    let output = ctx
        .execute(&Commands::List {
            path: None,
            keys: true,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["parameters"][0]["key"], "/a");
    assert_eq!(parsed["parameters"][0]["value"], "secret");
}

#[test]
fn test_table_rows_are_sorted_by_key() {
    let ctx = context_with(
        quiet_options(FilterMode::None),
        vec![record("/m", "2"), record("/b", "1"), record("/x", "3")],
    );
    let output = ctx.execute(&list(None)).unwrap();
    assert_eq!(table_keys(&output), vec!["/b", "/m", "/x"]);
}

#[test]
fn test_json_format() {
    let ctx = context_with(
        quiet_options(FilterMode::None),
        vec![
            Record::new("/b", "2", ParameterKind::StringList, 4),
            Record::new("/a", "1", ParameterKind::SecureString, 2),
        ],
    );
    let output = ctx
        .execute(&Commands::List {
            path: None,
            keys: false,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["parameters"][0]["key"], "/a");
    assert_eq!(parsed["parameters"][0]["version"], 2);
    assert_eq!(parsed["parameters"][1]["type"], "StringList");
}

#[test]
fn test_framing_blank_line_unless_quiet() {
    let ctx = context_with(RunOptions::default(), Vec::new());
    assert_eq!(ctx.execute(&list(None)).unwrap(), "\n0 results matched.\n");

    let debug = RunOptions {
        debug: true,
        ..RunOptions::default()
    };
    let ctx = context_with(debug, Vec::new());
    assert_eq!(ctx.execute(&list(None)).unwrap(), "0 results matched.\n");
}
