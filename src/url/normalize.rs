use url::Url;

/// Schemes the crawler is willing to fetch
const ACCEPTED_SCHEMES: &[&str] = &["http", "https"];

/// Returns true if the URL uses a scheme the crawler can fetch
pub fn is_http_scheme(url: &Url) -> bool {
    ACCEPTED_SCHEMES.contains(&url.scheme())
}

/// Resolves a link against a base URL
///
/// The link may be absolute or relative. Resolution follows RFC 3986 as
/// implemented by [`Url::join`], so `../x`, `//host/x`, `?q` and the like all
/// behave the way a browser would treat them.
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL, if its scheme is `http` or `https`
/// * `None` - The link did not resolve, or resolved to another scheme
///   (`mailto:`, `javascript:`, `tel:`, `data:`, `ftp:` ...)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use web_harvester::url::resolve_link;
///
/// let base = Url::parse("https://example.com/docs/index.html").unwrap();
/// let resolved = resolve_link(&base, "../about").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/about");
///
/// assert!(resolve_link(&base, "mailto:someone@example.com").is_none());
/// ```
pub fn resolve_link(base: &Url, link: &str) -> Option<Url> {
    let resolved = base.join(link).ok()?;
    is_http_scheme(&resolved).then_some(resolved)
}

/// Computes the visited-set key for a URL string
///
/// Parseable URLs are keyed by their serialized form with the fragment
/// removed, so `http://a.com`, `http://a.com/` and `http://a.com/#top` all map
/// to the same node. Unparseable input is keyed by the trimmed raw string.
pub fn visit_key(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.into()
        }
        Err(_) => raw.trim().to_string(),
    }
}
