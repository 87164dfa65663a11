//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - The depth-first worklist of pending URLs
//! - Overall crawl coordination, cancellation and result collection

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::{run_crawl, Coordinator, CrawlOptions, CrawlOutput, PageResult};
pub use fetcher::{build_http_client, Fetcher};
pub use frontier::{Frontier, QueuedUrl};
