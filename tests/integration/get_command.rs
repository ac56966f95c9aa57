//! Integration tests for `pstore get`

use crate::integration::{context_with, quiet_options, record};
use pstore::cli::{Commands, MISSING_KEY_MESSAGE};
use pstore::error::PstoreError;
use pstore::filter::FilterMode;

#[test]
fn test_get_prints_only_the_value() {
    let ctx = context_with(
        quiet_options(FilterMode::None),
        vec![record("/app/db", "secret"), record("/app/cache", "redis")],
    );
    let output = ctx
        .execute(&Commands::Get {
            key: Some("/app/cache".to_string()),
        })
        .unwrap();
    assert_eq!(output, "redis\n");
}

#[test]
fn test_get_ignores_filters() {
    let ctx = context_with(
        quiet_options(FilterMode::Substring("nomatch".to_string())),
        vec![record("/app/db", "secret")],
    );
    let output = ctx
        .execute(&Commands::Get {
            key: Some("/app/db".to_string()),
        })
        .unwrap();
    assert_eq!(output, "secret\n");
}

#[test]
fn test_get_missing_key_argument() {
    let ctx = context_with(quiet_options(FilterMode::None), Vec::new());
    for key in [None, Some(String::new())] {
        let err = ctx.execute(&Commands::Get { key }).unwrap_err();
        assert!(matches!(err, PstoreError::MissingArgument(_)));
        assert_eq!(err.to_string(), MISSING_KEY_MESSAGE);
    }
}

#[test]
fn test_get_unknown_key() {
    let ctx = context_with(quiet_options(FilterMode::None), vec![record("/a", "1")]);
    let err = ctx
        .execute(&Commands::Get {
            key: Some("/b".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, PstoreError::ParameterNotFound(ref k) if k == "/b"));
}
