//! Pstore: AWS Parameter Store Manager
//!
//! Fetches parameters from a hierarchical key/value store, narrows them with a
//! substring or regular-expression filter, sorts them by key, and renders them
//! as a table, a single value, or a series of provisioning commands.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod filter;
pub mod logging;
pub mod source;
pub mod spinner;
pub mod types;
