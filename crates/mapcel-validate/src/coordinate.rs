use mapcel_model::CoordinateKind;
use thiserror::Error;

use crate::parse::parse_coordinate;

/// Why a single coordinate cell was rejected. The display text is the
/// message shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateIssue {
    #[error("Not a valid number")]
    NotANumber,
    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

impl CoordinateIssue {
    fn out_of_range(kind: CoordinateKind) -> Self {
        match kind {
            CoordinateKind::Latitude => Self::LatitudeOutOfRange,
            CoordinateKind::Longitude => Self::LongitudeOutOfRange,
        }
    }
}

/// Validates one cell and returns the parsed value.
///
/// `None` stands for a cell missing from a short row and is treated like
/// any other non-number. Range bounds are inclusive.
pub fn validate_coordinate(
    value: Option<&str>,
    kind: CoordinateKind,
) -> Result<f64, CoordinateIssue> {
    let number = value.map_or(f64::NAN, parse_coordinate);
    if number.is_nan() {
        return Err(CoordinateIssue::NotANumber);
    }
    if !kind.contains(number) {
        return Err(CoordinateIssue::out_of_range(kind));
    }
    Ok(number)
}
