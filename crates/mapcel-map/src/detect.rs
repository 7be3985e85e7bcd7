//! Header-to-role detection.

use serde::Serialize;
use tracing::debug;

use mapcel_model::{ColumnRoles, CoordinateKind};

use crate::patterns::{allows_substring, patterns_for};
use crate::utils::normalize_header;

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized header equals the pattern.
    Exact,
    /// Normalized header contains the pattern (multi-character patterns only).
    Substring,
}

/// A detected column together with the pattern that selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMatch<'a> {
    pub column: &'a str,
    pub pattern: &'static str,
    pub kind: MatchKind,
}

/// Finds the header for one role.
///
/// The exact pass walks `patterns` in priority order and returns the first
/// header equal to a pattern. Only if that finds nothing, the substring pass
/// does the same with containment, skipping single-character patterns so
/// `x` never matches inside `taxi`. Within a pass, the earliest pattern wins
/// and, for that pattern, the earliest header.
pub fn find_column_match<'a>(
    headers: &'a [String],
    patterns: &'static [&'static str],
) -> Option<ColumnMatch<'a>> {
    let normalized: Vec<String> = headers
        .iter()
        .map(String::as_str)
        .map(normalize_header)
        .collect();

    for &pattern in patterns {
        if let Some(idx) = normalized.iter().position(|h| h == pattern) {
            return Some(ColumnMatch {
                column: headers[idx].as_str(),
                pattern,
                kind: MatchKind::Exact,
            });
        }
    }

    for &pattern in patterns.iter().filter(|p| allows_substring(p)) {
        if let Some(idx) = normalized.iter().position(|h| h.contains(pattern)) {
            return Some(ColumnMatch {
                column: headers[idx].as_str(),
                pattern,
                kind: MatchKind::Substring,
            });
        }
    }

    None
}

/// Same as [`find_column_match`] but returns only the original header.
pub fn find_matching_column<'a>(
    headers: &'a [String],
    patterns: &'static [&'static str],
) -> Option<&'a str> {
    find_column_match(headers, patterns).map(|found| found.column)
}

/// Detects latitude and longitude headers with the pattern that matched each.
///
/// The roles are resolved independently, so one header can be chosen for
/// both (e.g. a header named `latlong`).
pub fn detect_with_details(
    headers: &[String],
) -> (Option<ColumnMatch<'_>>, Option<ColumnMatch<'_>>) {
    let lat = find_column_match(headers, patterns_for(CoordinateKind::Latitude));
    let long = find_column_match(headers, patterns_for(CoordinateKind::Longitude));
    (lat, long)
}

/// Detects latitude and longitude headers, preserving original spelling.
pub fn detect_coordinate_columns(headers: &[String]) -> ColumnRoles {
    let (lat, long) = detect_with_details(headers);
    debug!(
        headers = headers.len(),
        lat_column = lat.as_ref().map(|m| m.column),
        lat_match = ?lat.as_ref().map(|m| m.kind),
        long_column = long.as_ref().map(|m| m.column),
        long_match = ?long.as_ref().map(|m| m.kind),
        "detected coordinate columns"
    );
    ColumnRoles::new(
        lat.map(|m| m.column.to_string()),
        long.map(|m| m.column.to_string()),
    )
}
