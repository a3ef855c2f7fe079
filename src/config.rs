use chrono::{Local, NaiveDate};
use std::time::Duration;

/// Earliest date supported by EDGAR full text search.
pub const EARLIEST_SEARCH_DATE: (i32, u32, u32) = (2000, 1, 1);

/// Configuration for the Edgar client
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URLs for the EDGAR services the downloader talks to
    pub base_urls: EdgarUrls,
}

/// Base URLs for different EDGAR services
#[derive(Debug, Clone)]
pub struct EdgarUrls {
    /// Base URL for EDGAR archives
    pub archives: String,
    /// Base URL for the full text search index
    pub search: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("edgar-downloader/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        }
    }
}

impl EdgarConfig {
    /// Creates a new EdgarConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use edgar_downloader::{Edgar, EdgarConfig};
    /// use std::time::Duration;
    ///
    /// let config = EdgarConfig::new(
    ///     "YourAppName contact@example.com",
    ///     Duration::from_secs(30),
    ///     None,
    /// );
    /// let edgar = Edgar::with_config(config)?;
    /// # Ok::<(), edgar_downloader::EdgarError>(())
    /// ```
    pub fn new(
        user_agent: impl Into<String>,
        timeout: Duration,
        base_urls: Option<EdgarUrls>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
            base_urls: base_urls.unwrap_or_default(),
        }
    }
}

impl Default for EdgarUrls {
    fn default() -> Self {
        Self {
            archives: "https://www.sec.gov/Archives/edgar".to_string(),
            search: "https://efts.sec.gov/LATEST/search-index".to_string(),
        }
    }
}

/// Date limits applied when a request leaves its date range open.
///
/// `earliest` is both the default lower bound and the floor no request may go
/// below; `today` is the default upper bound. Passing these in explicitly keeps
/// validation independent of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub today: NaiveDate,
}

impl DateBounds {
    pub fn new(earliest: NaiveDate, today: NaiveDate) -> Self {
        Self { earliest, today }
    }

    /// Bounds for a request made right now: the full text search floor up to
    /// the local calendar date.
    pub fn current() -> Self {
        Self::new(earliest_search_date(), Local::now().date_naive())
    }
}

impl Default for DateBounds {
    fn default() -> Self {
        Self::current()
    }
}

pub(crate) fn earliest_search_date() -> NaiveDate {
    let (year, month, day) = EARLIEST_SEARCH_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
