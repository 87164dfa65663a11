//! Output module for aggregating and reporting crawl results
//!
//! This module handles:
//! - Replaying extraction transforms over every fetched page
//! - Deduplicating results across the whole crawl
//! - Writing the sectioned report to a file or standard output
//! - The request total printed in verbose mode

mod bundle;
mod report;
pub mod stats;

pub use bundle::ExtractionBundle;
pub use report::{emit_report, render_report, write_report, ReportSections};
pub use stats::{format_statistics, print_statistics};
