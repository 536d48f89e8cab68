//! Small text helpers used by the scrapers and for logging.
//!
//! - Removal of site-specific markup noise
//! - String truncation for log previews

/// Remove every literal occurrence of `pattern` from `s`.
///
/// Used for formatting noise that some sites leave inside text nodes, such
/// as the `"|\n"` separator between date and time on mondo.rs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_pattern("12.05.2024. |\n14:30", "|\n"), "12.05.2024. 14:30");
/// ```
pub fn strip_pattern(s: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return s.to_string();
    }
    s.replace(pattern, "")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// char boundary) with an ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
