use mapcel_model::CoordinateKind;

/// Latitude header names, highest priority first.
pub const LATITUDE_PATTERNS: &[&str] = &["lat", "latitude", "y"];

/// Longitude header names, highest priority first.
pub const LONGITUDE_PATTERNS: &[&str] = &["lon", "long", "lng", "longitude", "x"];

pub fn patterns_for(kind: CoordinateKind) -> &'static [&'static str] {
    match kind {
        CoordinateKind::Latitude => LATITUDE_PATTERNS,
        CoordinateKind::Longitude => LONGITUDE_PATTERNS,
    }
}

/// Single-character patterns only ever match a whole header.
pub(crate) fn allows_substring(pattern: &str) -> bool {
    pattern.chars().count() > 1
}
