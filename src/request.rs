//! Validation and normalization of download requests.
//!
//! [`FilingRequest::new`] turns the raw caller inputs into a request the
//! resolver can act on. Every check runs before any network activity, in this
//! order: filing type, identifier, count, `after_date`, `before_date`, and
//! finally the ordering of the two dates.

use chrono::NaiveDate;
use std::num::NonZeroUsize;

use super::config::DateBounds;
use super::error::{EdgarError, Result};
use super::forms;
use super::options::DownloadOptions;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated, normalized download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRequest {
    /// Filing type, guaranteed to be in the supported set.
    pub filing_type: String,
    /// Ticker or CIK, uppercased with leading zeros stripped.
    pub ticker_or_cik: String,
    /// Maximum number of filings. `None` means no limit.
    pub limit: Option<NonZeroUsize>,
    /// Inclusive lower bound on the filing date.
    pub after_date: NaiveDate,
    /// Inclusive upper bound on the filing date.
    pub before_date: NaiveDate,
    pub include_amendments: bool,
    pub include_filing_details: bool,
}

impl FilingRequest {
    /// Validates raw inputs against `bounds` and builds a request.
    ///
    /// # Errors
    ///
    /// * `EdgarError::UnsupportedFilingType` - `filing_type` is not in the supported set
    /// * `EdgarError::InvalidIdentifier` - the identifier is empty once normalized
    /// * `EdgarError::InvalidFilingCount` - a limit of zero was given
    /// * `EdgarError::InvalidDateFormat` - a date is not a `YYYY-MM-DD` calendar date
    /// * `EdgarError::DateBeforeEarliest` - `after_date` precedes `bounds.earliest`
    /// * `EdgarError::InvalidDateRange` - `after_date` is later than `before_date`
    pub fn new(
        filing_type: &str,
        ticker_or_cik: &str,
        options: &DownloadOptions,
        bounds: &DateBounds,
    ) -> Result<Self> {
        if !forms::is_supported(filing_type) {
            return Err(EdgarError::UnsupportedFilingType {
                filing_type: filing_type.to_string(),
                supported: forms::supported_filings().to_vec(),
            });
        }

        let normalized = normalize_identifier(ticker_or_cik);
        if normalized.is_empty() {
            return Err(EdgarError::InvalidIdentifier(ticker_or_cik.to_string()));
        }

        let limit = match options.limit {
            Some(limit) => Some(NonZeroUsize::new(limit).ok_or(EdgarError::InvalidFilingCount)?),
            None => None,
        };

        let after_date = match options.after_date.as_deref() {
            Some(raw) => {
                let date = parse_date("after_date", raw)?;
                if date < bounds.earliest {
                    return Err(EdgarError::DateBeforeEarliest {
                        date,
                        earliest: bounds.earliest,
                    });
                }
                date
            }
            None => bounds.earliest,
        };

        let before_date = match options.before_date.as_deref() {
            Some(raw) => parse_date("before_date", raw)?,
            None => bounds.today,
        };

        if after_date > before_date {
            return Err(EdgarError::InvalidDateRange {
                after: after_date,
                before: before_date,
            });
        }

        Ok(Self {
            filing_type: filing_type.to_string(),
            ticker_or_cik: normalized,
            limit,
            after_date,
            before_date,
            include_amendments: options.include_amendments,
            include_filing_details: options.include_filing_details,
        })
    }

    /// Whether a search hit of form type `form` belongs in the result set.
    ///
    /// The exact filing type always matches; its amended variant matches only
    /// when amendments were requested. Everything else the index returns
    /// alongside (exhibits, unrelated forms, amendments of other types) does not.
    pub fn accepts_form(&self, form: &str) -> bool {
        if form == self.filing_type {
            return true;
        }
        self.include_amendments && form == forms::amended(&self.filing_type)
    }

    /// Whether `date` lies inside the inclusive request window.
    pub fn in_window(&self, date: NaiveDate) -> bool {
        self.after_date <= date && date <= self.before_date
    }
}

/// Normalizes a ticker or CIK: trims whitespace, uppercases, and strips
/// leading zeros, so `" aapl "` becomes `"AAPL"` and `"0000102909"` becomes
/// `"102909"`. Applying it twice gives the same result as applying it once.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .trim_start_matches(|c: char| c == '0' || c.is_whitespace())
        .to_string()
}

/// Parses a strict `YYYY-MM-DD` date. Single-digit months or days, other
/// separators and impossible dates such as `2019-02-30` are rejected.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    let invalid = || EdgarError::InvalidDateFormat {
        field,
        value: raw.to_string(),
    };

    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}
