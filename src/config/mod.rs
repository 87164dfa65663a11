//! Configuration module for Web-Harvester
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every table and key is optional in the file.
//!
//! # Example
//!
//! ```no_run
//! use web_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvester.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractConfig, OutputConfig, DEFAULT_MAX_CONCURRENT_FETCHES,
    DEFAULT_MAX_DEPTH, DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_crawler};
