#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use edgar_downloader::{
    ArchiveOperations, DateBounds, Downloader, EdgarError, Result, SearchOperations,
    SearchOptions, SearchResponse,
};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

pub const ARCHIVES_URL: &str = "https://www.sec.gov/Archives/edgar";

const EMPTY_PAGE: &str = r#"{"hits": {"total": {"value": 0, "relation": "eq"}, "hits": []}}"#;

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Bounds pinned to a fixed "today" so results don't depend on the clock.
pub fn bounds() -> DateBounds {
    DateBounds::new(date(2000, 1, 1), date(2024, 6, 30))
}

/// In-memory registry: serves search pages keyed by offset and documents
/// keyed by URL, and records every request it receives.
#[derive(Default)]
pub struct MockRegistry {
    pages: HashMap<u32, String>,
    documents: HashMap<String, Vec<u8>>,
    missing: HashSet<String>,
    searches: Mutex<Vec<SearchOptions>>,
    fetched: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three pages of Apple 8-K hits (page size 3, 7 hits in total).
    pub fn aapl_8k() -> Self {
        Self::new()
            .with_page(0, read_fixture("search/aapl-8k-from-0.json"))
            .with_page(3, read_fixture("search/aapl-8k-from-3.json"))
            .with_page(6, read_fixture("search/aapl-8k-from-6.json"))
    }

    /// Apple 10-Q hits served without a page size and with a lower-bound total
    /// of 3: two hits at offset 0, one at offset 2, and an empty page at 3.
    pub fn aapl_10q_lower_bound() -> Self {
        Self::new()
            .with_page(0, read_fixture("search/aapl-10q-gte-from-0.json"))
            .with_page(2, read_fixture("search/aapl-10q-gte-from-2.json"))
            .with_page(3, read_fixture("search/aapl-10q-gte-from-3.json"))
    }

    pub fn with_page(mut self, from: u32, body: String) -> Self {
        self.pages.insert(from, body);
        self
    }

    pub fn with_document(mut self, url: &str, content: &[u8]) -> Self {
        self.documents.insert(url.to_string(), content.to_vec());
        self
    }

    /// Makes `url` answer with a 404.
    pub fn with_missing(mut self, url: &str) -> Self {
        self.missing.insert(url.to_string());
        self
    }

    pub fn searches(&self) -> Vec<SearchOptions> {
        self.searches.lock().unwrap().clone()
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.searches.lock().unwrap().len() + self.fetched.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchOperations for MockRegistry {
    async fn search(&self, options: SearchOptions) -> Result<SearchResponse> {
        let from = options.from.unwrap_or(0);
        self.searches.lock().unwrap().push(options);

        let body = self.pages.get(&from).map(String::as_str).unwrap_or(EMPTY_PAGE);
        SearchResponse::from_json(body)
    }
}

#[async_trait]
impl ArchiveOperations for MockRegistry {
    fn archives_url(&self) -> &str {
        ARCHIVES_URL
    }

    async fn document(&self, url: &str) -> Result<Vec<u8>> {
        self.fetched.lock().unwrap().push(url.to_string());

        if self.missing.contains(url) {
            return Err(EdgarError::NotFound);
        }
        Ok(self
            .documents
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("contents of {url}").into_bytes()))
    }
}

pub fn downloader(registry: MockRegistry, root: &Path) -> Downloader<MockRegistry> {
    Downloader::with_client(registry, root).with_date_bounds(bounds())
}

/// Accession numbers of the filings saved under `<root>/sec-edgar-filings/<ticker>/<filing_type>`.
pub fn saved_accessions(root: &Path, ticker: &str, filing_type: &str) -> Vec<String> {
    let dir = root
        .join("sec-edgar-filings")
        .join(ticker)
        .join(filing_type);
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut accessions: Vec<String> = entries
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    accessions.sort();
    accessions
}
