//! Coordinate column detection.
//!
//! Maps raw CSV header strings to the latitude and longitude roles using a
//! fixed, priority-ordered list of name patterns with an exact-match pass
//! followed by a substring pass.

#![deny(unsafe_code)]

mod detect;
mod patterns;
mod utils;

pub use detect::{
    ColumnMatch, MatchKind, detect_coordinate_columns, detect_with_details, find_column_match,
    find_matching_column,
};
pub use patterns::{LATITUDE_PATTERNS, LONGITUDE_PATTERNS, patterns_for};
pub use utils::normalize_header;
