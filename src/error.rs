use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("'{filing_type}' filings are not supported. Please choose from the following: {}.", .supported.join(", "))]
    UnsupportedFilingType {
        filing_type: String,
        supported: Vec<&'static str>,
    },

    #[error("Invalid ticker or CIK: '{0}' is empty after normalization")]
    InvalidIdentifier(String),

    #[error("Invalid number of filings: must be 1 or greater")]
    InvalidFilingCount,

    #[error("Invalid {field}: '{value}' is not a date of the form YYYY-MM-DD")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error(
        "Invalid after_date: filings cannot be downloaded before {earliest}, got {date}. Please enter a date on or after {earliest}"
    )]
    DateBeforeEarliest { date: NaiveDate, earliest: NaiveDate },

    #[error("Invalid after_date and before_date: after_date {after} is later than before_date {before}")]
    InvalidDateRange { after: NaiveDate, before: NaiveDate },

    #[error("EDGAR search API error: {0}")]
    SearchApi(String),

    #[error("Unexpected search response: {0}")]
    Schema(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(
        "Unexpected content type from URL {url}. Expected pattern {expected_pattern}, but got Content-Type: {got_content_type}. Content preview: {content_preview}..."
    )]
    UnexpectedContentType {
        url: String,
        expected_pattern: String,
        got_content_type: String,
        content_preview: String,
    },
}

impl EdgarError {
    /// Whether this error was raised while validating caller input, before
    /// any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EdgarError::UnsupportedFilingType { .. }
                | EdgarError::InvalidIdentifier(_)
                | EdgarError::InvalidFilingCount
                | EdgarError::InvalidDateFormat { .. }
                | EdgarError::DateBeforeEarliest { .. }
                | EdgarError::InvalidDateRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EdgarError>;
