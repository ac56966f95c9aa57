//! Pagination collapse: drain a page stream into one ordered record list.

use crate::debug::DebugEcho;
use crate::error::PstoreError;
use crate::source::PageStream;
use crate::types::Record;
use futures::StreamExt;
use tracing::debug;

/// Concatenate every page in arrival order.
///
/// On the first error, whatever was collected is dropped. A failure after at
/// least one good page is reported as [`PstoreError::PartialPageFailure`].
pub async fn collect_pages(
    mut pages: PageStream<'_>,
    echo: &DebugEcho,
) -> Result<Vec<Record>, PstoreError> {
    let mut records = Vec::new();
    let mut page_count = 0usize;
    while let Some(page) = pages.next().await {
        match page {
            Ok(page) => {
                echo.page(page_count, &page);
                debug!(page = page_count, records = page.records.len(), "Received page");
                page_count += 1;
                records.extend(page.records);
            }
            Err(err) if page_count == 0 => return Err(err),
            Err(err) => {
                return Err(PstoreError::PartialPageFailure {
                    pages: page_count,
                    source: Box::new(err),
                })
            }
        }
    }
    debug!(pages = page_count, records = records.len(), "Listing complete");
    Ok(records)
}
