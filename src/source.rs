//! Parameter Source Abstraction
//!
//! The remote hierarchical key/value store the client reads from. Listing is
//! paginated and surfaces as a stream of pages; single lookups return one record.
//! Credentials, retries, and transport timeouts belong to the implementation.

use crate::error::PstoreError;
use crate::types::{Page, Record};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

pub mod memory;
pub mod ssm;

pub use memory::MemorySource;
pub use ssm::{SsmSettings, SsmSource};

/// Pages of a recursive, decrypted listing, in the order the store returns them.
pub type PageStream<'a> = Pin<Box<dyn Stream<Item = Result<Page, PstoreError>> + Send + 'a>>;

/// Parameter source trait
#[async_trait]
pub trait ParameterSource: Send + Sync {
    /// List everything under `path`, recursively, with values decrypted.
    fn list_pages<'a>(&'a self, path: &'a str) -> PageStream<'a>;

    /// Fetch exactly one key, decrypted.
    async fn get(&self, key: &str) -> Result<Record, PstoreError>;

    /// Short name for logs.
    fn source_name(&self) -> &str;
}
