//! Web-Harvester: a depth-bounded web crawler with pluggable page extraction
//!
//! This crate fetches every page reachable from a seed URL within a depth
//! budget, then runs extraction transforms (emails, links, CSS selector text,
//! XSS-prone query parameters) over the fetched pages and aggregates the
//! deduplicated results.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Web-Harvester operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors for a single page fetch
///
/// These never abort a crawl: the crawler logs them and moves on to the
/// next node in the worklist.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("request timeout for {url}")]
    Timeout { url: String },

    #[error("connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL the failed fetch was aimed at
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::UnsupportedScheme { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlOutput, PageResult};
pub use output::ExtractionBundle;
pub use state::{CrawlState, CrawlStats};
