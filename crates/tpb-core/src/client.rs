//! HTTP client for the torrent index
//!
//! Wraps a reqwest client that fetches result pages, maps HTTP status
//! codes to scraper errors and optionally retries transient failures.

use std::time::Duration;

use tokio::time::sleep;

use crate::error::{Result, TpbError};
use crate::url::{DEFAULT_BASE_URL, join_url};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host every path is appended to (default: https://thepiratebay.org)
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// Maximum retry attempts for transient errors (default: 0)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            max_retries: 0,
        }
    }
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client wrapper for the torrent index
///
/// Handles all HTTP communication with the site, including:
/// - Proper headers (User-Agent, Accept-Language)
/// - Mapping of 404, 429 and other error statuses
/// - Optional retries with exponential backoff for transient errors
pub struct TpbClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl TpbClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
                );
                headers
            });

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(TpbError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            max_retries: config.max_retries,
        })
    }

    /// Fetch HTML content from a path on the site
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g., "/top/all")
    ///
    /// # Returns
    /// The HTML content as a string, or an error if the request fails
    ///
    /// # Errors
    /// - `HttpError` - Network errors
    /// - `NotFound` - Server returned 404
    /// - `RateLimited` - Server returned 429 after all retries exhausted
    /// - `Status` - Any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = join_url(&self.base_url, path);
        self.fetch_with_retry(&url).await
    }

    /// Internal method to fetch with retry logic
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            match self.do_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) if Self::is_retryable(&e) && attempt < self.max_retries => {
                    // Exponential backoff: 1s, 2s, 4s
                    let backoff = Duration::from_secs(1 << attempt.min(6));
                    tracing::warn!(
                        url,
                        attempt = attempt + 1,
                        backoff_secs = backoff.as_secs(),
                        error = %e,
                        "request failed, retrying"
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TpbError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TpbError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TpbError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(TpbError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(TpbError::HttpError)
    }

    /// Check if an error is retryable
    fn is_retryable(error: &TpbError) -> bool {
        match error {
            TpbError::RateLimited => true,
            TpbError::Status { status, .. } => *status >= 500,
            TpbError::HttpError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
