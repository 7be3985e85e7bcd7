//! GeoJSON output types.
//!
//! Only the subset the converter emits is modelled: a named feature
//! collection of points carrying a legacy `crs` member, which MapLibre and
//! QGIS both accept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// CRS name for WGS84 longitude/latitude.
pub const EPSG_4326_URN: &str = "urn:ogc:def:crs:EPSG::4326";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct GeoFeatureCollection {
    pub name: String,
    pub crs: NamedCrs,
    pub features: Vec<Feature>,
}

impl GeoFeatureCollection {
    /// Creates a WGS84-tagged collection.
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            crs: NamedCrs::wgs84(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "name")]
pub struct NamedCrs {
    pub properties: CrsProperties,
}

impl NamedCrs {
    pub fn wgs84() -> Self {
        Self {
            properties: CrsProperties {
                name: EPSG_4326_URN.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsProperties {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: PointGeometry,
    /// Source row keyed by header, in header order.
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn point(longitude: f64, latitude: f64, properties: Map<String, Value>) -> Self {
        Self {
            geometry: PointGeometry {
                coordinates: [longitude, latitude],
            },
            properties,
        }
    }
}

/// Point geometry. Coordinates are `[longitude, latitude]` (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}
