//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator drives a depth-bounded traversal from a seed URL:
//! - Popping `(url, depth)` nodes off the frontier
//! - Marking each URL visited before it is fetched
//! - Dispatching fetches to a bounded pool of tasks
//! - Extracting links from fetched pages and queueing them one hop deeper
//! - Collecting page content and XSS candidates
//! - Stopping on cancellation and returning whatever was collected
//!
//! All crawl state lives on the coordinating task. Fetch tasks only perform
//! HTTP requests, so the visited check-and-mark is never raced.

use crate::config::{validate_crawler, CrawlerConfig};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::{Frontier, QueuedUrl};
use crate::extract::{extract_links, find_potential_xss_params};
use crate::state::{CrawlState, CrawlStats};
use crate::{FetchError, HarvestError};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Content of one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The URL that was requested
    pub url: String,

    /// Response body as text
    pub content: String,
}

/// Everything a crawl produced
#[derive(Debug, Clone, Default)]
pub struct CrawlOutput {
    /// Fetched pages in visitation order
    pub pages: Vec<PageResult>,

    /// XSS-candidate descriptors, one batch per fetched page
    pub xss_candidates: Vec<String>,

    /// Counters for the crawl
    pub stats: CrawlStats,
}

/// Traversal settings that do not belong to the fetcher
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum number of fetches in flight; 1 gives strict depth-first order
    pub max_concurrent_fetches: usize,

    /// Evaluate every fetched URL with the XSS parameter heuristic
    pub check_xss: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 1,
            check_xss: false,
        }
    }
}

impl From<&CrawlerConfig> for CrawlOptions {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_concurrent_fetches: config.max_concurrent_fetches,
            check_xss: config.check_xss,
        }
    }
}

type FetchOutcome = (QueuedUrl, Result<String, FetchError>);

/// Main crawler coordinator structure
pub struct Coordinator {
    fetcher: Arc<Fetcher>,
    options: CrawlOptions,
    cancel: CancellationToken,
}

/// Per-crawl working set, dropped when the crawl returns
struct Traversal {
    state: CrawlState,
    frontier: Frontier,
    pages: Vec<PageResult>,
    xss_candidates: Vec<String>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The fetcher used for every page request
    /// * `options` - Pool size and XSS checking
    pub fn new(fetcher: Fetcher, options: CrawlOptions) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            options,
            cancel: CancellationToken::new(),
        }
    }

    /// Creates a coordinator from crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, HarvestError> {
        let fetcher = Fetcher::new(config)?;
        Ok(Self::new(fetcher, CrawlOptions::from(config)))
    }

    /// Replaces the cancellation token
    ///
    /// Cancelling the token stops new fetches from being issued. Fetches
    /// already in flight are abandoned and the crawl returns what it has.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns a handle that cancels this coordinator's crawls
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Crawls from `seed_url`, fetching pages up to `depth` hops away
    ///
    /// Depth counts the seed: `depth = 1` fetches only the seed page,
    /// `depth = 2` also fetches the pages it links to, and `depth <= 0`
    /// fetches nothing. Each distinct URL is fetched at most once.
    ///
    /// Fetch failures are logged and counted; the failed page is simply not
    /// expanded. This method never fails.
    pub async fn crawl(&self, seed_url: &str, depth: i64) -> CrawlOutput {
        let started = Instant::now();
        let max_in_flight = self.options.max_concurrent_fetches.max(1);

        let mut traversal = Traversal {
            state: CrawlState::new(),
            frontier: Frontier::seeded(seed_url, depth),
            pages: Vec::new(),
            xss_candidates: Vec::new(),
        };
        let mut in_flight: JoinSet<FetchOutcome> = JoinSet::new();
        let mut cancelled = false;

        tracing::debug!(seed = seed_url, depth, max_in_flight, "Starting crawl");

        loop {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            while in_flight.len() < max_in_flight {
                let Some(node) = traversal.frontier.pop() else {
                    break;
                };
                if !node.within_budget() {
                    continue;
                }
                if !traversal.state.mark_visited(&node.url) {
                    tracing::trace!("Already visited {}", node.url);
                    continue;
                }

                traversal.state.record_request();
                tracing::info!("Fetching URL: {}", node.url);

                let fetcher = Arc::clone(&self.fetcher);
                in_flight.spawn(async move {
                    let result = fetcher.fetch(&node.url).await;
                    (node, result)
                });
            }

            if in_flight.is_empty() {
                break;
            }

            let joined = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => None,
                joined = in_flight.join_next() => joined,
            };

            match joined {
                Some(Ok((node, result))) => self.handle_fetched(&mut traversal, node, result),
                Some(Err(e)) => {
                    traversal.state.record_failure();
                    tracing::error!("Fetch task failed: {}", e);
                }
                None => {
                    cancelled = true;
                    break;
                }
            }
        }

        if cancelled {
            tracing::warn!(
                "Crawl cancelled: abandoning {} in-flight fetches, {} URLs left in frontier",
                in_flight.len(),
                traversal.frontier.len()
            );
            in_flight.shutdown().await;
        }

        let pages_fetched = traversal.pages.len();
        let stats = traversal
            .state
            .into_stats(pages_fetched, started.elapsed(), cancelled);

        tracing::info!(
            "Crawl finished: {} pages fetched, {} requests, {} failures in {:?}",
            stats.pages_fetched,
            stats.requests,
            stats.failures,
            stats.elapsed
        );

        CrawlOutput {
            pages: traversal.pages,
            xss_candidates: traversal.xss_candidates,
            stats,
        }
    }

    /// Records the outcome of one fetch and queues the page's links
    fn handle_fetched(
        &self,
        traversal: &mut Traversal,
        node: QueuedUrl,
        result: Result<String, FetchError>,
    ) {
        let content = match result {
            Ok(content) => content,
            Err(e) => {
                traversal.state.record_failure();
                tracing::warn!("Error fetching URL {}: {}", node.url, e);
                return;
            }
        };

        let links = extract_links(&content, &node.url);

        if self.options.check_xss {
            traversal
                .xss_candidates
                .extend(find_potential_xss_params(&node.url));
        }

        let queued = traversal
            .frontier
            .push_children(&links, node.depth - 1, &traversal.state);
        tracing::debug!(
            url = %node.url,
            links = links.len(),
            queued,
            "Processed page"
        );

        traversal.pages.push(PageResult {
            url: node.url,
            content,
        });
    }
}

/// Runs a complete crawl described by configuration
///
/// This function:
/// 1. Validates the crawler settings, then builds the HTTP client and coordinator
/// 2. Arms the optional whole-crawl deadline
/// 3. Crawls from the configured seed to the configured depth
///
/// The deadline cancels a child of `cancel`, so it never cancels the
/// caller's token.
///
/// # Returns
///
/// * `Ok(CrawlOutput)` - Crawl ran (possibly cut short by cancellation)
/// * `Err(HarvestError::Config)` - The crawler settings are invalid
/// * `Err(HarvestError::Reqwest)` - The HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// use tokio_util::sync::CancellationToken;
/// use web_harvester::config::CrawlerConfig;
/// use web_harvester::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlerConfig {
///     seed_url: "https://example.com/".to_string(),
///     max_depth: 2,
///     ..CrawlerConfig::default()
/// };
/// let output = run_crawl(&config, CancellationToken::new()).await?;
/// println!("{} pages", output.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    config: &CrawlerConfig,
    cancel: CancellationToken,
) -> Result<CrawlOutput, HarvestError> {
    validate_crawler(config)?;

    let crawl_token = cancel.child_token();
    let coordinator = Coordinator::from_config(config)?.with_cancellation(crawl_token.clone());

    let deadline = config.crawl_deadline().map(|limit| {
        let token = crawl_token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            tracing::warn!("Crawl deadline of {:?} reached", limit);
            token.cancel();
        })
    });

    let output = coordinator.crawl(&config.seed_url, config.max_depth).await;

    if let Some(handle) = deadline {
        handle.abort();
    }

    Ok(output)
}
