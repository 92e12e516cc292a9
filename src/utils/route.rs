//! Site path and URL utilities.
//!
//! Pure functions, no I/O:
//! - Base URL normalization (leading/trailing slash handling)
//! - Joining internal paths onto a base URL
//! - Link type detection (external vs internal)

/// Normalize a base URL path so it begins and ends with `/`.
///
/// Runs of slashes collapse into one and surrounding whitespace is dropped.
/// Normalizing an already normalized value returns it unchanged.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize_base_url(""), "/");
/// assert_eq!(normalize_base_url("docs"), "/docs/");
/// assert_eq!(normalize_base_url("//a//b"), "/a/b/");
/// ```
pub fn normalize_base_url(base: &str) -> String {
    let mut out = String::with_capacity(base.len() + 2);
    out.push('/');
    for segment in base.trim().split('/').filter(|s| !s.is_empty()) {
        out.push_str(segment);
        out.push('/');
    }
    out
}

/// Join an internal site path onto a base URL.
///
/// The base is normalized first; the path's leading slashes are dropped.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_base("/", "/blog"), "/blog");
/// assert_eq!(join_base("/site/", "/blog"), "/site/blog");
/// assert_eq!(join_base("/site/", "/"), "/site/");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let mut out = normalize_base_url(base);
    out.push_str(path.trim_start_matches('/'));
    out
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Drop the `?query` and `#fragment` parts of an internal path.
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_query_fragment("/docs/intro#setup"), "/docs/intro");
/// assert_eq!(strip_query_fragment("/search?q=x"), "/search");
/// ```
#[inline]
pub fn strip_query_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Strip a route base path (e.g. `/docs`) from an internal path.
///
/// Returns the remainder without leading slash, or `None` if the path is
/// not under the route. A route of `/` matches every path.
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_route_prefix("/docs/intro", "/docs"), Some("intro"));
/// assert_eq!(strip_route_prefix("/docsearch", "/docs"), None);
/// ```
pub fn strip_route_prefix<'a>(path: &'a str, route: &str) -> Option<&'a str> {
    let route = route.trim_end_matches('/');
    let rest = path.strip_prefix(route)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest.trim_start_matches('/'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("docs"), "/docs/");
        assert_eq!(normalize_base_url("/docs"), "/docs/");
        assert_eq!(normalize_base_url("docs/"), "/docs/");
        assert_eq!(normalize_base_url("//a//b///"), "/a/b/");
        assert_eq!(normalize_base_url("  /belajar-solidity/ "), "/belajar-solidity/");
    }

    #[test]
    fn test_normalize_base_url_idempotent() {
        for input in ["", "/", "a", "/a/b", "a//b/", "///", " x ", "/x/y/z/"] {
            let once = normalize_base_url(input);
            assert_eq!(normalize_base_url(&once), once, "input: {input:?}");
            assert!(once.starts_with('/') && once.ends_with('/'));
        }
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("/", "/blog"), "/blog");
        assert_eq!(join_base("/site/", "/blog"), "/site/blog");
        assert_eq!(join_base("/site", "blog/post"), "/site/blog/post");
        assert_eq!(join_base("/site/", "/"), "/site/");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link(":nothing"));
    }

    #[test]
    fn test_strip_query_fragment() {
        assert_eq!(strip_query_fragment("/docs/intro#setup"), "/docs/intro");
        assert_eq!(strip_query_fragment("/search?q=x#top"), "/search");
        assert_eq!(strip_query_fragment("/plain"), "/plain");
    }

    #[test]
    fn test_strip_route_prefix() {
        assert_eq!(strip_route_prefix("/docs/intro", "/docs"), Some("intro"));
        assert_eq!(strip_route_prefix("/docs/intro", "/docs/"), Some("intro"));
        assert_eq!(strip_route_prefix("/docs", "/docs"), Some(""));
        assert_eq!(strip_route_prefix("/docsearch", "/docs"), None);
        assert_eq!(strip_route_prefix("/blog/post", "/"), Some("blog/post"));
        assert_eq!(strip_route_prefix("/", "/"), Some(""));
    }
}
