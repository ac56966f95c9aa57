//! Core data types: parameter records and result pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter Store value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
}

impl ParameterKind {
    /// Name used by the Parameter Store API and the AWS CLI `--type` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::String => "String",
            ParameterKind::StringList => "StringList",
            ParameterKind::SecureString => "SecureString",
        }
    }

    /// Parse the API name. Returns `None` for types this client does not know.
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ParameterKind::String),
            "StringList" => Some(ParameterKind::StringList),
            "SecureString" => Some(ParameterKind::SecureString),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One Parameter Store entry. Immutable once fetched; values arrive decrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub version: i64,
}

impl Record {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        kind: ParameterKind,
        version: i64,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind,
            version,
        }
    }
}

/// One batch of records returned by a paginated list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<Record>,
}

impl Page {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}
