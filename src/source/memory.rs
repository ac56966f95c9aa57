//! In-process parameter source backed by pre-built pages.

use crate::error::PstoreError;
use crate::source::{PageStream, ParameterSource};
use crate::types::{Page, Record};
use async_trait::async_trait;
use futures::stream;

/// Serves a fixed set of pages. Listing filters by key prefix the same way the
/// store's recursive path listing does; a failure can be injected after a given
/// number of pages.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<Page>,
    fail_after: Option<(usize, String)>,
}

impl MemorySource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            fail_after: None,
        }
    }

    /// Single page holding all `records`.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(vec![Page::new(records)])
    }

    /// Yield `pages` pages, then an error with `message`.
    pub fn failing_after(mut self, pages: usize, message: impl Into<String>) -> Self {
        self.fail_after = Some((pages, message.into()));
        self
    }

    fn under_path(path: &str, key: &str) -> bool {
        if path == "/" {
            return true;
        }
        let prefix = path.trim_end_matches('/');
        key == prefix || key.starts_with(&format!("{}/", prefix))
    }
}

#[async_trait]
impl ParameterSource for MemorySource {
    fn list_pages<'a>(&'a self, path: &'a str) -> PageStream<'a> {
        let mut items: Vec<Result<Page, PstoreError>> = self
            .pages
            .iter()
            .map(|page| {
                Ok(Page::new(
                    page.records
                        .iter()
                        .filter(|r| Self::under_path(path, &r.key))
                        .cloned()
                        .collect(),
                ))
            })
            .collect();
        if let Some((after, ref message)) = self.fail_after {
            items.truncate(after);
            items.push(Err(PstoreError::RemoteFetch(message.clone())));
        }
        Box::pin(stream::iter(items))
    }

    async fn get(&self, key: &str) -> Result<Record, PstoreError> {
        self.pages
            .iter()
            .flat_map(|page| page.records.iter())
            .find(|r| r.key == key)
            .cloned()
            .ok_or_else(|| PstoreError::ParameterNotFound(key.to_string()))
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}
