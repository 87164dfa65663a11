//! Crawl-scoped state for a single crawl invocation
//!
//! A `CrawlState` is created when a crawl starts, mutated only by the task
//! driving that crawl, and turned into [`CrawlStats`] when the crawl returns.
//! It is never shared between crawls.
use crate::url::visit_key;
use std::collections::HashSet;
use std::time::Duration;

/// Mutable state owned by the crawl coordinator
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Visit keys of every URL already fetched or attempted
    visited: HashSet<String>,

    /// Number of fetches issued, successful or not
    request_count: u64,

    /// Number of fetches that failed at the network layer
    failed_count: u64,
}

impl CrawlState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited
    ///
    /// Check and insert happen in one step: the first caller for a given
    /// URL gets `true` and must fetch it; every later caller gets `false`.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(visit_key(url))
    }

    /// Returns true if the URL has already been marked
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(&visit_key(url))
    }

    /// Records that a fetch has been issued
    pub fn record_request(&mut self) {
        self.request_count += 1;
    }

    /// Records that an issued fetch failed
    pub fn record_failure(&mut self) {
        self.failed_count += 1;
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn failed_count(&self) -> u64 {
        self.failed_count
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Consumes the state into a summary
    pub fn into_stats(
        self,
        pages_fetched: usize,
        elapsed: Duration,
        cancelled: bool,
    ) -> CrawlStats {
        CrawlStats {
            requests: self.request_count,
            failures: self.failed_count,
            urls_visited: self.visited.len(),
            pages_fetched,
            elapsed,
            cancelled,
        }
    }
}

/// Summary of a finished (or cancelled) crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Fetches issued
    pub requests: u64,

    /// Fetches that produced no content
    pub failures: u64,

    /// Distinct URLs marked visited
    pub urls_visited: usize,

    /// Pages that returned content
    pub pages_fetched: usize,

    /// Wall-clock crawl time
    pub elapsed: Duration,

    /// True if the crawl stopped early on cancellation
    pub cancelled: bool,
}
