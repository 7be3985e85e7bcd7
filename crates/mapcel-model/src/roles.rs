use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role of a coordinate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateKind {
    #[serde(rename = "lat")]
    Latitude,
    #[serde(rename = "long")]
    Longitude,
}

impl CoordinateKind {
    /// Inclusive `(min, max)` range accepted for this kind.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }

    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Header names assigned to the latitude and longitude roles.
///
/// Names keep the original casing and whitespace of the source header.
/// Both roles may point at the same header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub lat_column: Option<String>,
    pub long_column: Option<String>,
}

impl ColumnRoles {
    pub fn new(lat_column: Option<String>, long_column: Option<String>) -> Self {
        Self {
            lat_column,
            long_column,
        }
    }

    /// Returns `(latitude, longitude)` when both roles were detected.
    pub fn both(&self) -> Option<(&str, &str)> {
        match (&self.lat_column, &self.long_column) {
            (Some(lat), Some(long)) => Some((lat.as_str(), long.as_str())),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.both().is_some()
    }

    pub fn column(&self, kind: CoordinateKind) -> Option<&str> {
        match kind {
            CoordinateKind::Latitude => self.lat_column.as_deref(),
            CoordinateKind::Longitude => self.long_column.as_deref(),
        }
    }
}
