//! Small helpers shared by config loading, navigation and the CLI.
//!
//! - [`route`]: site-path and URL helpers (`normalize_base_url`, `join_base`)

pub mod route;

/// Return "s" suffix for plural counts
///
/// - `plural_s(1)` -> `""`
/// - `plural_s(3)` -> `"s"`
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "error")` -> `"0 errors"`
/// - `plural_count(1, "error")` -> `"1 error"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
