//! EDGAR full text search.
//!
//! Wire types for the `search-index` endpoint and the mapping from
//! [`SearchOptions`] to its query string. The endpoint answers with an
//! Elasticsearch-style document: a page of `hits`, the total number of matches
//! and, on failure, an `error` object in place of the hits.

use super::Edgar;
use super::error::{EdgarError, Result};
use super::traits::SearchOperations;
use async_trait::async_trait;
use serde::Deserialize;

/// A page of search results.
///
/// Only the fields needed to select and locate filings are kept; the rest of
/// the document (`took`, scores, display names, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Hits,
    /// Echo of the executed query, used for its page size
    #[serde(default)]
    pub query: Option<QueryInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryInfo {
    #[serde(default)]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hits {
    pub total: TotalHits,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TotalHits {
    pub value: u32,
    pub relation: String,
}

impl TotalHits {
    /// Whether `value` is the exact number of matches rather than a lower bound.
    pub fn is_exact(&self) -> bool {
        self.relation == "eq"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    /// `<accession number>:<document file name>`
    pub _id: String,
    pub _source: Source,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// CIKs involved in the filing; the filer is listed last.
    pub ciks: Vec<String>,
    pub file_date: String,
    /// Type of the indexed document, e.g. `8-K` for the primary document or `EX-99.1`.
    pub file_type: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    root_cause: Vec<RootCause>,
}

#[derive(Debug, Deserialize)]
struct RootCause {
    #[serde(default)]
    reason: Option<String>,
}

impl SearchResponse {
    /// Parses a search response body.
    ///
    /// # Errors
    ///
    /// * `EdgarError::SearchApi` - the endpoint reported an error
    /// * `EdgarError::Schema` - the body is not a search response
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| EdgarError::Schema(format!("search response is not JSON: {e}")))?;

        if value.get("error").is_some() {
            let reason = serde_json::from_value::<ErrorEnvelope>(value)
                .ok()
                .and_then(|envelope| envelope.error.root_cause.into_iter().next())
                .and_then(|cause| cause.reason)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(EdgarError::SearchApi(reason));
        }

        serde_json::from_value(value).map_err(|e| EdgarError::Schema(e.to_string()))
    }
}

/// Options for configuring EDGAR searches
///
/// # Examples
///
/// ```rust
/// use edgar_downloader::SearchOptions;
///
/// let options = SearchOptions::new()
///     .with_entity_name("AAPL")
///     .with_forms(vec!["8-K".to_string()])
///     .with_date_range("2017-01-01".to_string(), "2017-03-25".to_string())
///     .with_from(100);
/// assert!(!options.to_query_params().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Search query. Empty matches every document of the entity.
    pub query: Option<String>,
    /// Ticker, CIK, company name or individual's name.
    pub entity_name: Option<String>,
    /// Type of forms to search - e.g. '10-K'.
    pub forms: Option<Vec<String>>,
    /// Skip a number of results
    pub from: Option<u32>,
    /// Start date. Must be in the form of `yyyy-mm-dd`. Must also specify `enddt`
    pub start_date: Option<String>,
    /// End date. Must be in the form of `yyyy-mm-dd`. Must also specify `startdt`
    pub end_date: Option<String>,
}

impl SearchOptions {
    /// Creates a new instance of SearchOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query text
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the entity name filter
    pub fn with_entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Sets the form types to filter by (e.g., ["10-K", "10-Q"])
    pub fn with_forms(mut self, forms: Vec<String>) -> Self {
        self.forms = Some(forms);
        self
    }

    /// Sets the starting index for results
    pub fn with_from(mut self, from: u32) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the date range for the search
    ///
    /// # Arguments
    /// * `start_date` - Start date in YYYY-MM-DD format
    /// * `end_date` - End date in YYYY-MM-DD format
    pub fn with_date_range(mut self, start_date: String, end_date: String) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        params.push((
            "q".to_string(),
            self.query.clone().unwrap_or_default(),
        ));

        if let Some(ref name) = self.entity_name {
            params.push(("entityName".to_string(), name.clone()));
        }

        if let Some(ref forms) = self.forms {
            params.push(("forms".to_string(), forms.join(",")));
        }

        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            params.push(("dateRange".to_string(), "custom".to_string()));
            params.push(("startdt".to_string(), start.clone()));
            params.push(("enddt".to_string(), end.clone()));
        }

        if let Some(from) = self.from {
            params.push(("from".to_string(), from.to_string()));
        }

        params
    }
}

#[async_trait]
impl SearchOperations for Edgar {
    /// Requests a single page of search results.
    async fn search(&self, options: SearchOptions) -> Result<SearchResponse> {
        let params = options.to_query_params();
        let query_string = serde_urlencoded::to_string(&params)
            .map_err(|e| EdgarError::InvalidResponse(e.to_string()))?;

        let url = format!("{}?{}", self.search_url(), query_string);
        let response = self.get_json_text(&url).await?;

        SearchResponse::from_json(&response)
    }
}
