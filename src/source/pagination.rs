//! Token-driven pagination over a record-listing endpoint.
//!
//! The paginator keeps asking its [`PageSource`] for the next page until the
//! server stops handing out continuation tokens, appending every record to a
//! single [`Collection`] in delivery order.

use crate::error::FetchError;
use crate::model::{Collection, Page};
use async_trait::async_trait;

/// Anything that can fetch one page of records given a continuation token.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page following `offset`, or the first page when `None`.
    async fn fetch_page(&self, offset: Option<&str>) -> Result<Page, FetchError>;
}

/// Collects every record from a [`PageSource`], one page at a time.
pub struct Paginator<S> {
    source: S,
    max_pages: usize,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(source: S, max_pages: usize) -> Self {
        Self { source, max_pages }
    }

    /// Fetches all pages and returns the concatenated records.
    ///
    /// Requests are strictly sequential. The first failing page aborts the
    /// run and whatever was gathered so far is dropped. A server that keeps
    /// returning tokens past `max_pages` yields
    /// [`FetchError::PaginationLimitExceeded`].
    pub async fn fetch_all(&self) -> Result<Collection, FetchError> {
        let mut collection = Collection::new();
        let mut offset: Option<String> = None;

        for page_number in 1..=self.max_pages {
            let page = self.source.fetch_page(offset.as_deref()).await?;
            let (records, next) = page.into_parts();
            tracing::debug!(
                "Fetched page {} with {} records (more: {})",
                page_number,
                records.len(),
                next.is_some()
            );
            collection.append(records);

            match next {
                Some(token) => offset = Some(token),
                None => {
                    tracing::info!(
                        "Pagination finished after {} pages, {} records",
                        page_number,
                        collection.len()
                    );
                    return Ok(collection);
                }
            }
        }

        tracing::error!(
            "Server still returned a continuation token after {} pages",
            self.max_pages
        );
        Err(FetchError::PaginationLimitExceeded {
            max_pages: self.max_pages,
        })
    }
}
