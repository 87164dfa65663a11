use crate::url::resolve_link;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Extracts outbound links from an HTML page
///
/// Every `<a href>` is resolved against `base_url` and kept only if it lands
/// on `http` or `https`. The result is deduplicated and keeps document order,
/// which makes crawl order reproducible.
///
/// Malformed HTML is parsed the way a browser would (html5ever), and an
/// unparseable `base_url` simply yields no links.
///
/// # Example
///
/// ```
/// use web_harvester::extract::extract_links;
///
/// let html = r#"<a href="/a">A</a><a href="mailto:x@y.com">mail</a><a href="/a">again</a>"#;
/// let links = extract_links(html, "https://example.com/index.html");
/// assert_eq!(links, vec!["https://example.com/a".to_string()]);
/// ```
pub fn extract_links(content: &str, base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        tracing::debug!("Cannot resolve links against unparseable base {}", base_url);
        return Vec::new();
    };

    let document = Html::parse_document(content);
    let mut seen = HashSet::new();

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(&base, href))
        .map(String::from)
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
