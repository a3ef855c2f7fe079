//! Seams between the download pipeline and the EDGAR services it consumes.
//!
//! The pipeline only needs two things from the outside world: a page of
//! search results and the bytes behind a document URL. [`Edgar`](crate::Edgar)
//! provides both over HTTP; tests provide them from fixtures.

use super::error::Result;
use super::search::{SearchOptions, SearchResponse};
use async_trait::async_trait;

/// Operations for searching EDGAR filings.
#[async_trait]
pub trait SearchOperations {
    /// Performs a search query on EDGAR and returns one page of results.
    async fn search(&self, options: SearchOptions) -> Result<SearchResponse>;
}

/// Operations for retrieving documents from the EDGAR archives.
#[async_trait]
pub trait ArchiveOperations {
    /// Base URL filing documents are resolved against.
    fn archives_url(&self) -> &str;
    /// Fetches the bytes of a single document.
    async fn document(&self, url: &str) -> Result<Vec<u8>>;
}
