/// Optional inputs to [`Downloader::get`](crate::Downloader::get).
///
/// Values are kept as the caller supplied them; validation happens when the
/// request is built, so a malformed date is reported together with the field
/// it came from.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Maximum number of filings to download. `None` downloads everything available.
    pub limit: Option<usize>,
    /// Inclusive lower bound, `YYYY-MM-DD`. Defaults to the search floor.
    pub after_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`. Defaults to today.
    pub before_date: Option<String>,
    /// Whether amended filings (e.g. `8-K/A`) are downloaded too. Defaults to false.
    pub include_amendments: bool,
    /// Whether the primary document of each filing is saved next to the full
    /// submission. Defaults to true.
    pub include_filing_details: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            limit: None,
            after_date: None,
            before_date: None,
            include_amendments: false,
            include_filing_details: true,
        }
    }
}

impl DownloadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after_date(mut self, after_date: impl Into<String>) -> Self {
        self.after_date = Some(after_date.into());
        self
    }

    pub fn with_before_date(mut self, before_date: impl Into<String>) -> Self {
        self.before_date = Some(before_date.into());
        self
    }

    /// Sets both ends of the date range.
    pub fn with_date_range(self, after_date: impl Into<String>, before_date: impl Into<String>) -> Self {
        self.with_after_date(after_date).with_before_date(before_date)
    }

    /// Set whether to include amendment forms.
    ///
    /// When true, requesting "8-K" also downloads "8-K/A" filings.
    /// When false (default), only the exact form type is downloaded.
    pub fn with_include_amendments(mut self, include_amendments: bool) -> Self {
        self.include_amendments = include_amendments;
        self
    }

    pub fn with_include_filing_details(mut self, include_filing_details: bool) -> Self {
        self.include_filing_details = include_filing_details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = DownloadOptions::new();
        assert_eq!(options.limit, None);
        assert_eq!(options.after_date, None);
        assert_eq!(options.before_date, None);
        assert!(!options.include_amendments);
        assert!(options.include_filing_details);
    }

    #[test]
    fn builder() {
        let options = DownloadOptions::new()
            .with_limit(5)
            .with_date_range("2017-01-01", "2017-03-25")
            .with_include_amendments(true)
            .with_include_filing_details(false);

        assert_eq!(options.limit, Some(5));
        assert_eq!(options.after_date.as_deref(), Some("2017-01-01"));
        assert_eq!(options.before_date.as_deref(), Some("2017-03-25"));
        assert!(options.include_amendments);
        assert!(!options.include_filing_details);
    }
}
