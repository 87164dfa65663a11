//! Crawl statistics display
//!
//! Verbose mode prints the request total after the report. The remaining
//! counters go to the log.

use crate::state::CrawlStats;

/// Formats the request total line
pub fn format_statistics(stats: &CrawlStats) -> String {
    format!("Total requests made: {}", stats.requests)
}

/// Prints statistics to stdout and logs the detailed counters
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStats) {
    println!("{}", format_statistics(stats));

    tracing::info!(
        requests = stats.requests,
        failures = stats.failures,
        urls_visited = stats.urls_visited,
        pages_fetched = stats.pages_fetched,
        cancelled = stats.cancelled,
        "Crawl took {:.2}s",
        stats.elapsed.as_secs_f64()
    );
}
