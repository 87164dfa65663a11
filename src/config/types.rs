use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Depth used when none is configured: fetch the seed page only
pub const DEFAULT_MAX_DEPTH: i64 = 1;

/// Per-fetch timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// One fetch in flight reproduces the sequential depth-first order
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

/// Main configuration structure for Web-Harvester
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Seed URL; always supplied on the command line
    #[serde(skip)]
    pub seed_url: String,

    /// Number of link hops that will be fetched, counting the seed as 1
    pub max_depth: i64,

    /// Timeout for a single fetch (seconds)
    pub request_timeout_secs: u64,

    /// Maximum number of fetches in flight at once
    pub max_concurrent_fetches: usize,

    /// User-Agent header; the HTTP client default is used when unset
    pub user_agent: Option<String>,

    /// Whole-crawl deadline (seconds) after which no new fetches are issued
    pub crawl_deadline_secs: Option<u64>,

    /// Collect XSS-candidate descriptors for every fetched URL
    pub check_xss: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            user_agent: None,
            crawl_deadline_secs: None,
            check_xss: false,
        }
    }
}

impl CrawlerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn crawl_deadline(&self) -> Option<Duration> {
        self.crawl_deadline_secs.map(Duration::from_secs)
    }
}

/// Which extraction transforms feed the report
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractConfig {
    /// Report email addresses
    pub emails: bool,

    /// Report outbound links
    pub links: bool,

    /// Report the text of elements matching this CSS selector
    pub selector: Option<String>,
}

/// Report destination configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Report file; standard output when unset
    pub path: Option<PathBuf>,

    /// Print the total number of requests after the report
    pub verbose: bool,
}
