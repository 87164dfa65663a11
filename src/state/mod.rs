//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: the visited set and request counters owned by one crawl
//! - `CrawlStats`: the read-only snapshot handed back when the crawl ends

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, CrawlStats};
