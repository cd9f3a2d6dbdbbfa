//! Table formatting utilities for CLI output.

use chrono::{DateTime, Utc};

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use qatrack_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

/// Locale-independent timestamp for tables.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
