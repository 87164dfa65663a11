use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Local part, `@`, dotted domain, then a TLD of at least two letters
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is a valid regex")
});

/// Extracts email-looking substrings from raw page content
///
/// The content is scanned as plain text, so addresses inside markup,
/// attributes and scripts are all found. Matches are deduplicated, keeping
/// the order of first occurrence. Nothing is validated beyond the pattern.
///
/// # Example
///
/// ```
/// use web_harvester::extract::extract_emails;
///
/// let emails = extract_emails("write to ops@example.com or ops@example.com");
/// assert_eq!(emails, vec!["ops@example.com".to_string()]);
/// ```
pub fn extract_emails(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EMAIL_RE
        .find_iter(content)
        .map(|m| m.as_str())
        .filter(|email| seen.insert(*email))
        .map(str::to_string)
        .collect()
}
