//! Property-based tests for filtering and ordering guarantees

use pstore::debug::DebugEcho;
use pstore::filter::{filter_records, sort_records, FilterMode, Matcher, Projection};
use pstore::types::{ParameterKind, Record};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = Record> {
    ("/[a-zA-Z]{1,3}(/[a-z0-9]{1,3}){0,2}", "[a-zA-Z0-9 ]{0,8}", 0i64..5).prop_map(
        |(key, value, version)| Record::new(key, value, ParameterKind::String, version),
    )
}

fn mode_strategy() -> impl Strategy<Value = FilterMode> {
    prop_oneof![
        Just(FilterMode::None),
        "[a-zA-Z/]{1,3}".prop_map(FilterMode::Substring),
        "[a-z]{1,2}".prop_map(FilterMode::Regex),
        "[a-z]".prop_map(|s| FilterMode::Regex(format!("^/{}", s))),
    ]
}

fn apply(records: Vec<Record>, mode: &FilterMode) -> Vec<Record> {
    let matcher = Matcher::compile(mode).unwrap();
    filter_records(
        records,
        &matcher,
        mode,
        Projection::KeyValue,
        &DebugEcho::disabled(),
    )
}

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[Record], full: &[Record]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

proptest! {
    #[test]
    fn filter_never_grows_or_reorders(
        records in prop::collection::vec(record_strategy(), 0..20),
        mode in mode_strategy(),
    ) {
        let output = apply(records.clone(), &mode);
        prop_assert!(output.len() <= records.len());
        prop_assert!(is_subsequence(&output, &records));
    }

    #[test]
    fn none_mode_is_identity(records in prop::collection::vec(record_strategy(), 0..20)) {
        prop_assert_eq!(apply(records.clone(), &FilterMode::None), records);
    }

    #[test]
    fn sort_is_idempotent(records in prop::collection::vec(record_strategy(), 0..20)) {
        let once = sort_records(records);
        let twice = sort_records(once.clone());
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.windows(2).all(|w| w[0].key <= w[1].key));
    }

    #[test]
    fn substring_ignores_case(
        records in prop::collection::vec(record_strategy(), 0..20),
        pattern in "[a-zA-Z]{1,3}",
    ) {
        let lower = apply(records.clone(), &FilterMode::Substring(pattern.to_lowercase()));
        let upper = apply(records, &FilterMode::Substring(pattern.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }
}
