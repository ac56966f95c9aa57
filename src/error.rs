//! Error types for the pstore command-line client.
//!
//! Every variant is fatal to the invocation: the binary prints the message and
//! exits non-zero. Nothing here is retried locally.

use thiserror::Error;

/// Errors surfaced by fetching, filtering, and rendering parameters.
#[derive(Debug, Error)]
pub enum PstoreError {
    /// Transport, authentication, or permission failure from the parameter store.
    #[error("{0}")]
    RemoteFetch(String),

    /// A page after the first one failed; records already collected are discarded.
    #[error("Failed after {pages} page(s) of results: {source}")]
    PartialPageFailure {
        pages: usize,
        #[source]
        source: Box<PstoreError>,
    },

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{0}")]
    MissingArgument(String),

    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for PstoreError {
    fn from(err: config::ConfigError) -> Self {
        PstoreError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for PstoreError {
    fn from(err: serde_json::Error) -> Self {
        PstoreError::OutputError(err.to_string())
    }
}
