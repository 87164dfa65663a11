//! Extraction pipeline for fetched pages
//!
//! Each transform is a pure function of page content (plus the page URL where
//! links need resolving). They share no state and can be replayed over the
//! crawl output in any order:
//! - `extract_emails`: email-looking substrings in raw text
//! - `extract_links`: absolute `http`/`https` targets of `<a href>` anchors
//! - `extract_by_selector`: text of elements matching a CSS selector
//! - `find_potential_xss_params`: query parameters commonly reflected unsafely

mod emails;
mod links;
mod selector;
mod xss;

pub use emails::extract_emails;
pub use links::extract_links;
pub use selector::{extract_by_selector, parse_selector};
pub use xss::{find_potential_xss_params, REFLECTED_PARAM_NAMES};
