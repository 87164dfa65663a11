//! Aggregation of extraction results across a crawl

use crate::config::ExtractConfig;
use crate::crawler::{CrawlOutput, PageResult};
use crate::extract::{extract_by_selector, extract_emails, extract_links};
use std::collections::BTreeSet;

/// Deduplicated extraction results for a whole crawl
///
/// Each set is independent. `BTreeSet` keeps the report stable from run to
/// run regardless of fetch completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionBundle {
    pub emails: BTreeSet<String>,
    pub links: BTreeSet<String>,
    pub selector_matches: BTreeSet<String>,
    pub xss_candidates: BTreeSet<String>,
}

impl ExtractionBundle {
    /// Builds the bundle for a finished crawl
    ///
    /// Emails, links and selector text are extracted from every fetched page
    /// for the transforms enabled in `extract`. XSS candidates were gathered
    /// during traversal and are taken from the crawl output as-is.
    pub fn aggregate(output: &CrawlOutput, extract: &ExtractConfig) -> Self {
        let mut bundle = Self::default();
        for page in &output.pages {
            bundle.add_page(page, extract);
        }
        bundle
            .xss_candidates
            .extend(output.xss_candidates.iter().cloned());
        bundle
    }

    /// Adds the enabled extractions for a single page
    pub fn add_page(&mut self, page: &PageResult, extract: &ExtractConfig) {
        if extract.emails {
            self.emails.extend(extract_emails(&page.content));
        }
        if extract.links {
            self.links.extend(extract_links(&page.content, &page.url));
        }
        if let Some(selector) = &extract.selector {
            self.selector_matches
                .extend(extract_by_selector(&page.content, selector));
        }
    }

    /// Total number of distinct results across all sets
    pub fn len(&self) -> usize {
        self.emails.len()
            + self.links.len()
            + self.selector_matches.len()
            + self.xss_candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
