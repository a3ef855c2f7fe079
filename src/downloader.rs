use std::path::{Path, PathBuf};

use super::Edgar;
use super::config::DateBounds;
use super::error::Result;
use super::fetcher::{self, DownloadTarget};
use super::forms;
use super::options::DownloadOptions;
use super::request::FilingRequest;
use super::resolver;
use super::traits::{ArchiveOperations, SearchOperations};

/// Downloads EDGAR filings for a ticker or CIK into a local directory tree.
///
/// Each call to [`Downloader::get`] runs one validate, resolve, fetch pass
/// and shares no state with earlier calls.
///
/// # Examples
///
/// ```ignore
/// use edgar_downloader::{DownloadOptions, Downloader};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let downloader = Downloader::new("my_app/1.0 (my@email.com)", "./filings")?;
///
///     // The five most recent 10-K filings for Apple
///     let count = downloader
///         .get("10-K", "AAPL", DownloadOptions::new().with_limit(5))
///         .await?;
///     println!("Downloaded {count} filings");
///
///     // All 8-K filings in a window, amendments included
///     let options = DownloadOptions::new()
///         .with_date_range("2017-01-01", "2017-03-25")
///         .with_include_amendments(true);
///     downloader.get("8-K", "AAPL", options).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Downloader<C = Edgar> {
    client: C,
    download_folder: PathBuf,
    /// Fixed date bounds; `None` uses [`DateBounds::current`] on every call.
    date_bounds: Option<DateBounds>,
}

impl Downloader<Edgar> {
    /// Creates a downloader backed by a default [`Edgar`] client.
    pub fn new(user_agent: &str, download_folder: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_client(Edgar::new(user_agent)?, download_folder))
    }
}

impl<C> Downloader<C> {
    /// Creates a downloader on top of any client providing search and archive access.
    pub fn with_client(client: C, download_folder: impl Into<PathBuf>) -> Self {
        Self {
            client,
            download_folder: download_folder.into(),
            date_bounds: None,
        }
    }

    /// Pins the date bounds used to default and check request dates.
    pub fn with_date_bounds(mut self, bounds: DateBounds) -> Self {
        self.date_bounds = Some(bounds);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn download_folder(&self) -> &Path {
        &self.download_folder
    }

    /// All supported filing types, sorted.
    pub fn supported_filings(&self) -> &'static [&'static str] {
        forms::supported_filings()
    }

    /// Validates the inputs of a [`Downloader::get`] call without downloading anything.
    pub fn request(
        &self,
        filing_type: &str,
        ticker_or_cik: &str,
        options: &DownloadOptions,
    ) -> Result<FilingRequest> {
        let bounds = self.date_bounds.unwrap_or_else(DateBounds::current);
        FilingRequest::new(filing_type, ticker_or_cik, options, &bounds)
    }
}

impl<C> Downloader<C>
where
    C: SearchOperations + ArchiveOperations,
{
    /// Downloads filings and saves them to disk.
    ///
    /// Returns the number of filings resolved. Every one of them has been
    /// written when this returns `Ok`, since any failure aborts the call.
    ///
    /// # Errors
    ///
    /// * Validation errors (see [`FilingRequest::new`]) before any request is sent
    /// * `EdgarError::SearchApi` / `EdgarError::Schema` for unexpected search responses
    /// * Transport and file errors while fetching or saving documents
    pub async fn get(
        &self,
        filing_type: &str,
        ticker_or_cik: &str,
        options: DownloadOptions,
    ) -> Result<usize> {
        let request = self.request(filing_type, ticker_or_cik, &options)?;

        let filings = resolver::resolve_filings(&self.client, &request).await?;
        tracing::info!(
            "Resolved {} {} filings for {} between {} and {}",
            filings.len(),
            request.filing_type,
            request.ticker_or_cik,
            request.after_date,
            request.before_date
        );

        let target = DownloadTarget::new(
            &self.download_folder,
            &request.ticker_or_cik,
            &request.filing_type,
        );
        fetcher::download_filings(
            &self.client,
            &target,
            &filings,
            request.include_filing_details,
        )
        .await?;

        Ok(filings.len())
    }
}
