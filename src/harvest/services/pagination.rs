use crate::shared::error::HarvestError;
use crate::shared::Result;
use anyhow::Context;
use std::future::Future;
use tracing::{debug, info};

/// Default number of records requested per search page
pub const DEFAULT_PAGE_SIZE: usize = 150;

/// Default cap on the number of non-empty pages one search may return
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// One page of an offset-paginated search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based offset of the first record
    pub offset: usize,
    /// Number of records requested
    pub rows: usize,
}

/// One page of search results as returned by the server
///
/// `raw_count` is the number of records the server sent, which may exceed
/// `records.len()` when an adapter skipped records it could not interpret.
/// Offsets advance by `raw_count` so skipped records never shift later pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage<T> {
    pub records: Vec<T>,
    pub raw_count: usize,
}

impl<T> SearchPage<T> {
    pub fn new(records: Vec<T>, raw_count: usize) -> Self {
        Self { records, raw_count }
    }

    /// A page where every record the server sent was kept
    pub fn complete(records: Vec<T>) -> Self {
        let raw_count = records.len();
        Self { records, raw_count }
    }

    /// The server returned no records at all
    pub fn is_exhausted(&self) -> bool {
        self.raw_count == 0
    }
}

/// Paginator - Drives an offset-paginated search to exhaustion
///
/// Requests pages of `page_size` starting at offset 0, advances the offset by
/// the number of records each page actually returned, and stops on the first
/// empty page. A short page is not treated as the end: only an empty page is.
///
/// A server that never returns an empty page is cut off after `max_pages`
/// non-empty pages with [`HarvestError::PaginationLimitExceeded`].
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
    max_pages: usize,
}

impl Paginator {
    pub fn new(page_size: usize, max_pages: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(HarvestError::Validation {
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }
        if max_pages == 0 {
            return Err(HarvestError::Validation {
                message: "max pages must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            page_size,
            max_pages,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Collects every record of a search, in server order
    ///
    /// # Arguments
    /// * `query` - Human-readable description of the search, used in logs and errors
    /// * `fetch_page` - Performs exactly one round trip for the given page
    ///
    /// # Errors
    /// The first failing page aborts collection; its error is returned with
    /// the offending offset attached as context.
    pub async fn collect_all<T, F, Fut>(&self, query: &str, fetch_page: F) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<SearchPage<T>>>,
    {
        self.collect_until(query, fetch_page, || false).await
    }

    /// Like [`Paginator::collect_all`], but checks `stop` before every page
    ///
    /// Once `stop` returns true no further page is requested and the records
    /// collected so far are returned.
    pub async fn collect_until<T, F, Fut, S>(
        &self,
        query: &str,
        mut fetch_page: F,
        stop: S,
    ) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<SearchPage<T>>>,
        S: Fn() -> bool,
    {
        let mut records = Vec::new();
        let mut offset = 0;

        // One extra request past the cap is needed to observe the empty page.
        for _ in 0..=self.max_pages {
            if stop() {
                info!(query, offset, collected = records.len(), "search stopped before exhaustion");
                return Ok(records);
            }
            let request = PageRequest {
                offset,
                rows: self.page_size,
            };
            debug!(
                query,
                offset,
                end = offset + self.page_size,
                "fetching search results"
            );

            let page = fetch_page(request).await.with_context(|| {
                format!(
                    "Failed to fetch search results {} - {} for {}",
                    offset,
                    offset + self.page_size,
                    query
                )
            })?;

            if page.is_exhausted() {
                debug!(query, total = records.len(), "no more search results");
                return Ok(records);
            }

            offset += page.raw_count;
            records.extend(page.records);
        }

        Err(HarvestError::PaginationLimitExceeded {
            query: query.to_string(),
            max_pages: self.max_pages,
        }
        .into())
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
