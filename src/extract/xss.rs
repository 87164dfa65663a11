use std::collections::HashSet;
use url::form_urlencoded;

/// Query parameter names that commonly echo their value back into a page
pub const REFLECTED_PARAM_NAMES: &[&str] = &[
    "q",
    "search",
    "test",
    "id",
    "page",
    "query",
    "user",
    "action",
    "s",
    "lang",
    "p",
    "item",
    "blog",
    "url",
    "l",
    "page_id",
    "name",
    "password",
    "email",
    "type",
    "year",
    "view",
    "comment",
    "showComment",
];

/// Flags query parameters worth a manual XSS check
///
/// This is a name lookup, not a vulnerability scan:
/// - URL with a `?`: the query (up to any `#`) is parsed as
///   `application/x-www-form-urlencoded`; every parameter whose name is in
///   [`REFLECTED_PARAM_NAMES`] yields `"<url> (<name>)"`, once per name.
/// - URL without `?` but containing `=`: yields `"<url> (single param)"`.
/// - Anything else yields nothing.
///
/// # Example
///
/// ```
/// use web_harvester::extract::find_potential_xss_params;
///
/// let found = find_potential_xss_params("http://x.com/search?q=1&foo=2");
/// assert_eq!(found, vec!["http://x.com/search?q=1&foo=2 (q)".to_string()]);
/// ```
pub fn find_potential_xss_params(url: &str) -> Vec<String> {
    let Some((_, rest)) = url.split_once('?') else {
        if url.contains('=') {
            return vec![format!("{} (single param)", url)];
        }
        return Vec::new();
    };

    let query = rest.split_once('#').map_or(rest, |(query, _)| query);
    let mut flagged = HashSet::new();

    form_urlencoded::parse(query.as_bytes())
        .map(|(name, _)| name.into_owned())
        .filter(|name| REFLECTED_PARAM_NAMES.contains(&name.as_str()))
        .filter(|name| flagged.insert(name.clone()))
        .map(|name| format!("{} ({})", url, name))
        .collect()
}
