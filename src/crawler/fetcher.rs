//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured timeout and user agent
//! - GET requests to fetch page content
//! - Error classification
//!
//! HTTP error statuses are not failures here: a 404 or 500 page is content
//! like any other and is handed back to the crawler as text.

use crate::config::CrawlerConfig;
use crate::url::is_http_scheme;
use crate::FetchError;
use reqwest::Client;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use web_harvester::config::CrawlerConfig;
/// use web_harvester::crawler::build_http_client;
///
/// let config = CrawlerConfig::default();
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .timeout(config.request_timeout())
        .gzip(true)
        .brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    builder.build()
}

/// Performs single bounded-timeout GET requests
///
/// Cloning a `Fetcher` is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher from crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a URL and returns its body as text
    ///
    /// # Error Classification
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | URL does not parse | `InvalidUrl` |
    /// | Scheme other than http/https | `UnsupportedScheme` |
    /// | Timeout (connect, headers or body) | `Timeout` |
    /// | Connection refused, DNS, TLS | `Connect` |
    /// | Body could not be read | `Body` |
    /// | Anything else from the client | `Request` |
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !is_http_scheme(&parsed) {
            return Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned HTTP {}", url, status.as_u16());
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }
}

/// Maps a client error to the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}
