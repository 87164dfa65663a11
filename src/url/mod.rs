//! URL handling module for Web-Harvester
//!
//! This module resolves candidate links against the page they were found on
//! and restricts the result to the `http` and `https` schemes. It also derives
//! the key the crawler uses for its visited set.

mod normalize;

// Re-export main functions
pub use normalize::{is_http_scheme, resolve_link, visit_key};
