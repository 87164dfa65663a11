use scraper::{Html, Selector};

/// Parses a CSS selector, returning `None` for invalid syntax
pub fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!("Invalid CSS selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Returns the text content of every element matching `selector`
///
/// Results are in document order and are not deduplicated here. An invalid
/// selector is treated as matching nothing.
///
/// # Example
///
/// ```
/// use web_harvester::extract::extract_by_selector;
///
/// let html = "<ul><li>one</li><li>two</li></ul>";
/// assert_eq!(extract_by_selector(html, "li"), vec!["one", "two"]);
/// assert!(extract_by_selector(html, "li[").is_empty());
/// ```
pub fn extract_by_selector(content: &str, selector: &str) -> Vec<String> {
    let Some(parsed) = parse_selector(selector) else {
        return Vec::new();
    };

    let document = Html::parse_document(content);
    document
        .select(&parsed)
        .map(|element| element.text().collect::<String>())
        .collect()
}
