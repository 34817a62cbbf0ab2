//! Numeric segment comparison of version tokens
//!
//! Tokens are compared segment by segment after stripping an optional `beta`
//! marker, so `beta2.0.0` orders above `1.9.9`. Timestamp tokens have no dots
//! and collapse into a single segment: same-length timestamps still order
//! correctly, tokens of differing length do not.

use std::cmp::Ordering;

const BETA_PREFIX: &str = "beta";

/// Strip a case-insensitive `beta` marker from the start of a token.
///
/// Returns `None` when the token does not carry the marker.
pub(crate) fn strip_beta_prefix(token: &str) -> Option<&str> {
    let head = token.get(..BETA_PREFIX.len())?;
    head.eq_ignore_ascii_case(BETA_PREFIX)
        .then(|| &token[BETA_PREFIX.len()..])
}

/// Numeric value of one dotted segment.
///
/// Held as its significant digits so magnitude survives past `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a>(&'a str);

pub(crate) const ZERO: Segment<'static> = Segment("0");

impl Ord for Segment<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Segment<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Parse one dotted segment. Missing and non-numeric segments are 0.
pub(crate) fn parse_segment(segment: &str) -> Segment<'_> {
    let digits = segment.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ZERO;
    }

    match digits.trim_start_matches('0') {
        "" => ZERO,
        significant => Segment(significant),
    }
}

fn segments(token: &str) -> Vec<Segment<'_>> {
    let token = token.trim();
    let body = strip_beta_prefix(token).unwrap_or(token);
    body.split('.').map(parse_segment).collect()
}

/// Compare two version tokens.
///
/// Segments absent from the shorter token count as 0, so `1.0` equals `1.0.0`.
///
/// Examples:
/// - "1.2.3" vs "1.2.4" -> Less
/// - "beta2.0.0" vs "1.9.9" -> Greater
/// - "1.0" vs "1.0.0" -> Equal
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left = segments(left);
    let right = segments(right);
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(ZERO);
            let r = right.get(i).copied().unwrap_or(ZERO);
            l.cmp(&r)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Same as [`compare_versions`], expressed as `1`, `-1` or `0`.
pub fn compare_versions_i32(left: &str, right: &str) -> i32 {
    match compare_versions(left, right) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

/// Returns true when `latest` orders strictly above `current`
pub fn has_update(current: &str, latest: &str) -> bool {
    compare_versions(latest, current) == Ordering::Greater
}
