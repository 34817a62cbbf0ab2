//! Human readable rendering of version tokens

use crate::version::compare::{ZERO, parse_segment, strip_beta_prefix};

/// Shown when a token is empty or missing
pub const UNKNOWN_VERSION: &str = "unknown version";

/// Length of a `YYYYMMDDHHmm` timestamp token
const TIMESTAMP_LEN: usize = 12;

/// Format a version token for display using the English sentinel.
///
/// Examples:
/// - "" -> "unknown version"
/// - "beta1.2.3" -> "Beta 1.2.3"
/// - "202310271530" -> "2023-10-27 15:30"
/// - "foo" -> "foo"
pub fn format_version(token: &str) -> String {
    format_version_with(token, UNKNOWN_VERSION)
}

/// Format a version token, returning `unknown` for empty input
pub fn format_version_with(token: &str, unknown: &str) -> String {
    let token = token.trim();
    if token.is_empty() {
        return unknown.to_string();
    }

    if let Some(rest) = strip_beta_prefix(token) {
        let mut parts = rest.split('.').map(parse_segment);
        let major = parts.next().unwrap_or(ZERO);
        let minor = parts.next().unwrap_or(ZERO);
        let patch = parts.next().unwrap_or(ZERO);
        return format!("Beta {major}.{minor}.{patch}");
    }

    let chars: Vec<char> = token.chars().collect();
    if chars.len() == TIMESTAMP_LEN {
        let field = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
        return format!(
            "{}-{}-{} {}:{}",
            field(0..4),
            field(4..6),
            field(6..8),
            field(8..10),
            field(10..12)
        );
    }

    token.to_string()
}
