//! # edgar-downloader - download SEC EDGAR filings to disk
//!
//! Given a filing type and a ticker or CIK, the downloader finds matching
//! filings through EDGAR full text search and saves each one under a
//! deterministic directory tree:
//!
//! ```text
//! <download folder>/sec-edgar-filings/<ticker or CIK>/<filing type>/<accession number>/
//! ```
//!
//! ## Pipeline
//!
//! - **Validation** - filing type, identifier, count and dates are checked and
//!   normalized before any request is sent ([`FilingRequest`])
//! - **Resolution** - search pages are walked lazily, newest first, until the
//!   count or the date window is exhausted ([`filing_references`])
//! - **Fetching** - filings are downloaded one after another and written to
//!   disk; the first failure aborts the run ([`download_filings`])
//!
//! ## Basic Usage
//!
//! ```ignore
//! use edgar_downloader::{DownloadOptions, Downloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SEC.gov requires a user agent identifying you
//!     let downloader = Downloader::new("YourAppName contact@example.com", "./filings")?;
//!
//!     // All 8-K filings for Apple since 2000, amendments excluded
//!     let count = downloader.get("8-K", "AAPL", DownloadOptions::new()).await?;
//!     println!("Downloaded {count} filings");
//!
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod downloader;
mod error;
mod fetcher;
pub mod forms;
mod options;
mod request;
mod resolver;
mod search;
mod traits;

pub use config::{DateBounds, EARLIEST_SEARCH_DATE, EdgarConfig, EdgarUrls};
pub use self::core::Edgar;
pub use downloader::Downloader;
pub use error::{EdgarError, Result};
pub use fetcher::{
    DownloadTarget, FULL_SUBMISSION_FILENAME, ROOT_FOLDER_NAME, download_filings,
    resolve_relative_urls,
};
pub use options::DownloadOptions;
pub use request::{FilingRequest, normalize_identifier, parse_date};
pub use resolver::{
    DetailDocument, FilingReference, filing_references, resolve_filings, search_options,
};
pub use search::{Hit, Hits, QueryInfo, SearchOptions, SearchResponse, Source, TotalHits};
pub use traits::{ArchiveOperations, SearchOperations};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
