use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode};

use super::config::EdgarConfig;
use super::error::{EdgarError, Result};

const PREVIEW_CHARS: usize = 200;

/// HTTP client for the SEC EDGAR full text search index and filing archives.
///
/// Every request carries the configured user agent, which SEC.gov requires in
/// order to contact whoever operates an automated client. Requests are issued
/// one at a time by the caller; the client adds no throttling and never retries,
/// so any transport failure surfaces immediately as an [`EdgarError`].
///
/// # Examples
///
/// ```rust
/// # use edgar_downloader::Edgar;
/// let edgar = Edgar::new("my_app/1.0 (my@email.com)")?;
/// # Ok::<(), edgar_downloader::EdgarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Edgar {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Base URL for EDGAR archives
    pub(crate) edgar_archives_url: String,

    /// Base URL for EDGAR search endpoint
    pub(crate) edgar_search_url: String,
}

impl Edgar {
    /// Creates a new Edgar client with the default timeout and SEC.gov base URLs.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - A descriptive identifier for your application, following the format
    ///   "AppName/Version (contact@email.com)".
    pub fn new(user_agent: &str) -> Result<Self> {
        let config = EdgarConfig {
            user_agent: user_agent.to_string(),
            ..EdgarConfig::default()
        };
        Self::with_config(config)
    }

    /// Creates an Edgar client with custom configuration settings.
    ///
    /// Use this constructor to change the timeout or to point the client at a
    /// different host, for example a local mirror of the archives.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| EdgarError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EdgarError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Edgar {
            client,
            edgar_archives_url: trim_trailing_slash(config.base_urls.archives),
            edgar_search_url: trim_trailing_slash(config.base_urls.search),
        })
    }

    /// Fetches the raw bytes behind a URL.
    ///
    /// Filing documents are saved exactly as served, so no decoding happens here.
    ///
    /// # Errors
    ///
    /// * `EdgarError::NotFound` - The resource doesn't exist (HTTP 404)
    /// * `EdgarError::RequestError` - Network failure
    /// * `EdgarError::InvalidResponse` - Any other non-success status
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.bytes().await?.to_vec()),
            StatusCode::NOT_FOUND => Err(EdgarError::NotFound),
            status => Err(unexpected_status(status, url, response).await),
        }
    }

    /// Fetches the body of a JSON endpoint as text.
    ///
    /// JSON endpoints on SEC.gov answer with an HTML error page when they are
    /// unhappy with a request, sometimes with a 200 status. A `text/html` body
    /// is therefore rejected with `EdgarError::UnexpectedContentType` unless
    /// the body itself is JSON.
    pub(crate) async fn get_json_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|val| val.to_str().ok())
                .map(str::to_lowercase);

            if let Some(ct) = content_type.filter(|ct| ct.contains("text/html")) {
                let body_text = response.text().await?;
                let trimmed = body_text.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    tracing::warn!(
                        "Received text/html content-type for JSON request, but content appears to be JSON: {}",
                        url
                    );
                    return Ok(body_text);
                }

                return Err(EdgarError::UnexpectedContentType {
                    url: url.to_string(),
                    expected_pattern: "application/json".to_string(),
                    got_content_type: ct,
                    content_preview: body_text.chars().take(PREVIEW_CHARS).collect(),
                });
            }
        }

        match status {
            StatusCode::OK => Ok(response.text().await?),
            StatusCode::NOT_FOUND => Err(EdgarError::NotFound),
            other => Err(unexpected_status(other, url, response).await),
        }
    }

    /// Returns the base URL for EDGAR archives.
    pub fn archives_url(&self) -> &str {
        &self.edgar_archives_url
    }

    /// Returns the base URL for EDGAR search.
    pub fn search_url(&self) -> &str {
        &self.edgar_search_url
    }
}

async fn unexpected_status(status: StatusCode, url: &str, response: Response) -> EdgarError {
    let error_body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());

    EdgarError::InvalidResponse(format!(
        "Unexpected status code: {} for URL: {}. Response preview: {}",
        status,
        url,
        error_body.chars().take(PREVIEW_CHARS).collect::<String>()
    ))
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
