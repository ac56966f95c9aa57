//! Debug echo: labelled, deterministic dumps of intermediate values for `--debug`.
//!
//! Output goes to stderr so stdout stays usable in pipelines. The text format is
//! versioned; bump [`DEBUG_FORMAT_VERSION`] when the layout of a dump changes.

use crate::filter::{FilterMode, Matcher};
use crate::types::{Page, Record};
use owo_colors::OwoColorize;
use std::io::Write;

pub const DEBUG_FORMAT_VERSION: u32 = 1;

/// Writer for `--debug` diagnostics. A disabled echo formats nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugEcho {
    enabled: bool,
    color: bool,
}

impl DebugEcho {
    pub fn new(enabled: bool, color: bool) -> Self {
        Self { enabled, color }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Write one labelled block followed by a blank line.
    pub fn emit(&self, label: &str, body: impl FnOnce() -> String) {
        if !self.enabled {
            return;
        }
        let text = format_block(label, &body());
        let mut stderr = std::io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{}", text.red())
        } else {
            writeln!(stderr, "{}", text)
        };
    }

    pub fn arguments(&self, args: &[String]) {
        self.emit("Arguments", || format_arguments(args));
    }

    pub fn profile(&self, profile: &str) {
        self.emit("Configuration profile", || format!("{:?}", profile));
    }

    pub fn page(&self, index: usize, page: &Page) {
        self.emit("Results Page", || format_page(index, page));
    }

    pub fn projection(&self, projection: &str, mode: &FilterMode) {
        self.emit("Filterable string", || format_projection(projection, mode));
    }

    pub fn list_request(&self, path: &str, page_size: i32) {
        self.emit("Request", || format_list_request(path, page_size));
    }

    pub fn get_request(&self, key: &str) {
        self.emit("Request", || format_get_request(key));
    }

    pub fn matcher(&self, matcher: &Matcher) {
        self.emit("Compiled filter", || format_matcher(matcher));
    }

    pub fn record(&self, label: &str, record: &Record) {
        self.emit(label, || format_record(record));
    }
}

pub fn format_block(label: &str, body: &str) -> String {
    format!("[debug v{}] {}:\n{}\n", DEBUG_FORMAT_VERSION, label, body)
}

pub fn format_arguments(args: &[String]) -> String {
    if args.is_empty() {
        return "  (none)".to_string();
    }
    args.iter()
        .enumerate()
        .map(|(i, a)| format!("  [{}] {:?}", i, a))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_record(record: &Record) -> String {
    format!(
        "  key: {:?}\n  value: {:?}\n  type: {}\n  version: {}",
        record.key, record.value, record.kind, record.version
    )
}

pub fn format_page(index: usize, page: &Page) -> String {
    let mut out = format!("  page: {}\n  records: {}", index, page.records.len());
    for record in &page.records {
        out.push_str(&format!("\n  - {:?} ({}, v{})", record.key, record.kind, record.version));
    }
    out
}

/// Parameters sent with a recursive, decrypted path listing.
pub fn format_list_request(path: &str, page_size: i32) -> String {
    format!(
        "  operation: GetParametersByPath\n  path: {:?}\n  recursive: true\n  with_decryption: true\n  max_results: {}",
        path, page_size
    )
}

pub fn format_get_request(key: &str) -> String {
    format!(
        "  operation: GetParameter\n  name: {:?}\n  with_decryption: true",
        key
    )
}

pub fn format_filter_mode(mode: &FilterMode) -> String {
    match mode {
        FilterMode::None => "none".to_string(),
        FilterMode::Substring(p) => format!("substring {:?}", p),
        FilterMode::Regex(p) => format!("regex {:?}", p),
    }
}

pub fn format_projection(projection: &str, mode: &FilterMode) -> String {
    format!("  {:?}\n  mode: {}", projection, format_filter_mode(mode))
}

pub fn format_matcher(matcher: &Matcher) -> String {
    match matcher {
        Matcher::All => "  match all".to_string(),
        Matcher::Substring { needle } => format!("  substring (upper-cased) {:?}", needle),
        Matcher::Regex(re) => format!("  regex /{}/", re.as_str()),
    }
}
