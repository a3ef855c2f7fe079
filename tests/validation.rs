mod common;

use common::{MockRegistry, date, downloader};
use edgar_downloader::{DownloadOptions, EdgarError, forms};
use tempfile::tempdir;

async fn rejected(filing_type: &str, ticker: &str, options: DownloadOptions) -> EdgarError {
    let root = tempdir().unwrap();
    let downloader = downloader(MockRegistry::aapl_8k(), root.path());

    let err = downloader.get(filing_type, ticker, options).await.unwrap_err();

    assert!(err.is_validation(), "expected a validation error, got {err}");
    assert_eq!(downloader.client().request_count(), 0, "no request may be sent");
    err
}

#[tokio::test]
async fn unsupported_filing_type() {
    for filing_type in ["10-X", "8-k", "8-K/A", ""] {
        let err = rejected(filing_type, "AAPL", DownloadOptions::new()).await;
        let message = err.to_string();
        assert!(message.contains(&format!("'{filing_type}'")));
        assert!(message.contains("10-K, 10-KT, 10-Q"));
    }
}

#[tokio::test]
async fn zero_limit() {
    let err = rejected("10-K", "AAPL", DownloadOptions::new().with_limit(0)).await;
    assert!(matches!(err, EdgarError::InvalidFilingCount));
}

#[tokio::test]
async fn malformed_dates() {
    let err = rejected("8-K", "AAPL", DownloadOptions::new().with_after_date("2017-13-01")).await;
    assert!(matches!(err, EdgarError::InvalidDateFormat { field: "after_date", .. }));

    let err = rejected("8-K", "AAPL", DownloadOptions::new().with_before_date("03/25/2017")).await;
    assert!(matches!(err, EdgarError::InvalidDateFormat { field: "before_date", .. }));
}

#[tokio::test]
async fn after_date_before_search_floor() {
    let err = rejected("8-K", "AAPL", DownloadOptions::new().with_after_date("1999-12-31")).await;
    match err {
        EdgarError::DateBeforeEarliest { date: got, earliest } => {
            assert_eq!(got, date(1999, 12, 31));
            assert_eq!(earliest, date(2000, 1, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn after_date_later_than_before_date() {
    let options = DownloadOptions::new().with_date_range("2017-03-25", "2017-01-01");
    let err = rejected("8-K", "AAPL", options).await;
    assert!(matches!(err, EdgarError::InvalidDateRange { .. }));
}

#[tokio::test]
async fn blank_identifier() {
    let err = rejected("8-K", "   ", DownloadOptions::new()).await;
    assert!(matches!(err, EdgarError::InvalidIdentifier(_)));
}

#[test]
fn every_supported_type_validates() {
    let root = tempdir().unwrap();
    let downloader = downloader(MockRegistry::new(), root.path());

    assert_eq!(downloader.supported_filings(), forms::SUPPORTED_FILINGS);
    for filing_type in downloader.supported_filings() {
        let request = downloader
            .request(filing_type, "AAPL", &DownloadOptions::new())
            .unwrap();
        assert_eq!(request.filing_type, *filing_type);
    }
}
