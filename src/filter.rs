//! Record filtering and ordering.
//!
//! A filter mode is decided once per invocation from the `--filter` and
//! `--regex` flags, compiled into a [`Matcher`], and evaluated against a
//! projection of each record. Filtering keeps input order; sorting happens
//! afterwards on the retained set. The matcher is compiled before any fetch.

use crate::debug::DebugEcho;
use crate::error::PstoreError;
use crate::types::Record;
use regex::Regex;
use tracing::{debug, warn};

/// Which filter applies to this invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    None,
    Substring(String),
    Regex(String),
}

impl FilterMode {
    /// Decide the mode from the two optional flags.
    ///
    /// Empty strings count as absent. When both are set the substring filter wins.
    pub fn from_flags(filter: Option<&str>, regex: Option<&str>) -> Self {
        let filter = filter.filter(|s| !s.is_empty());
        let regex = regex.filter(|s| !s.is_empty());
        match (filter, regex) {
            (Some(f), Some(r)) => {
                warn!(
                    filter = f,
                    regex = r,
                    "Both --filter and --regex were given; using --filter"
                );
                FilterMode::Substring(f.to_string())
            }
            (Some(f), None) => FilterMode::Substring(f.to_string()),
            (None, Some(r)) => FilterMode::Regex(r.to_string()),
            (None, None) => FilterMode::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FilterMode::None)
    }
}

/// Record fields joined into the string a filter is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `key` and `value` joined by a single space.
    KeyValue,
    /// `key` alone.
    Key,
}

impl Projection {
    pub fn project(&self, record: &Record) -> String {
        match self {
            Projection::KeyValue => format!("{} {}", record.key, record.value),
            Projection::Key => record.key.clone(),
        }
    }
}

/// A compiled [`FilterMode`].
#[derive(Debug, Clone)]
pub enum Matcher {
    All,
    Substring { needle: String },
    Regex(Regex),
}

impl Matcher {
    /// Compile the mode. An invalid regex is an error even if nothing would be matched.
    pub fn compile(mode: &FilterMode) -> Result<Self, PstoreError> {
        match mode {
            FilterMode::None => Ok(Matcher::All),
            FilterMode::Substring(pattern) => Ok(Matcher::Substring {
                needle: pattern.to_uppercase(),
            }),
            FilterMode::Regex(pattern) => Ok(Matcher::Regex(Regex::new(pattern)?)),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Substring { needle } => haystack.to_uppercase().contains(needle.as_str()),
            Matcher::Regex(re) => re.is_match(haystack),
        }
    }
}

/// Keep the records whose projection matches. Order is preserved.
pub fn filter_records(
    records: Vec<Record>,
    matcher: &Matcher,
    mode: &FilterMode,
    projection: Projection,
    echo: &DebugEcho,
) -> Vec<Record> {
    if let Matcher::All = matcher {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            let projected = projection.project(record);
            echo.projection(&projected, mode);
            matcher.is_match(&projected)
        })
        .collect()
}

/// Stable ascending sort by key, compared byte-wise.
pub fn sort_records(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| a.key.cmp(&b.key));
    records
}

/// Filter with an already compiled matcher, then sort.
pub fn select(
    records: Vec<Record>,
    matcher: &Matcher,
    mode: &FilterMode,
    projection: Projection,
    echo: &DebugEcho,
) -> Vec<Record> {
    let total = records.len();
    let retained = filter_records(records, matcher, mode, projection, echo);
    debug!(total, retained = retained.len(), "Filtered parameters");
    sort_records(retained)
}
