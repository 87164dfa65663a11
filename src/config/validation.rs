use crate::config::types::{Config, CrawlerConfig, ExtractConfig};
use crate::extract::parse_selector;
use crate::ConfigError;

/// Largest accepted per-fetch timeout (seconds)
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Largest accepted worker pool
const MAX_CONCURRENT_FETCHES: usize = 64;

/// Validates the entire configuration
///
/// Runs after command-line overrides are merged. A seed URL that does not
/// parse is not rejected here; it surfaces as a fetch failure like any other
/// unreachable page.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler(&config.crawler)?;
    validate_extract_config(&config.extract);
    Ok(())
}

/// Validates crawler configuration
///
/// Also run by [`crate::crawler::run_crawl`], so a crawl never starts on
/// settings the HTTP client or worker pool cannot honour.
pub fn validate_crawler(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seed_url.trim().is_empty() {
        return Err(ConfigError::InvalidUrl(
            "seed URL cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and {}, got {}",
            MAX_REQUEST_TIMEOUT_SECS, config.request_timeout_secs
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > MAX_CONCURRENT_FETCHES
    {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and {}, got {}",
            MAX_CONCURRENT_FETCHES, config.max_concurrent_fetches
        )));
    }

    if config.crawl_deadline_secs == Some(0) {
        return Err(ConfigError::Validation(
            "crawl_deadline_secs must be > 0 when set".to_string(),
        ));
    }

    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agent cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Checks extraction settings; problems here are warnings only
fn validate_extract_config(config: &ExtractConfig) {
    if let Some(selector) = &config.selector {
        if parse_selector(selector).is_none() {
            tracing::warn!(
                "CSS selector '{}' is invalid and will match nothing",
                selector
            );
        }
    }
}
