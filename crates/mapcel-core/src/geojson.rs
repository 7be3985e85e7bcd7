//! Validated rows to GeoJSON point features.

use mapcel_model::{Feature, GeoFeatureCollection};
use mapcel_validate::parse_coordinate;
use serde_json::{Map, Value};
use tracing::debug;

/// Builds a WGS84 point collection from table rows.
///
/// Each row becomes a point at `[longitude, latitude]` whose properties are
/// the whole row keyed by header, coordinate columns included. Rows whose
/// coordinates do not parse are dropped; callers are expected to have
/// validated the table first, so this only guards against misuse.
pub fn generate_geojson(
    rows: &[Vec<String>],
    headers: &[String],
    lat_column: &str,
    long_column: &str,
    name: &str,
) -> GeoFeatureCollection {
    let lat_index = headers.iter().position(|h| h == lat_column);
    let long_index = headers.iter().position(|h| h == long_column);
    let features: Vec<Feature> = rows
        .iter()
        .filter_map(|row| {
            let latitude = coordinate_at(row, lat_index);
            let longitude = coordinate_at(row, long_index);
            if latitude.is_nan() || longitude.is_nan() {
                return None;
            }
            Some(Feature::point(
                longitude,
                latitude,
                row_properties(headers, row),
            ))
        })
        .collect();

    if features.len() != rows.len() {
        debug!(
            collection = name,
            dropped = rows.len() - features.len(),
            "dropped rows without numeric coordinates"
        );
    }
    GeoFeatureCollection::new(name, features)
}

fn coordinate_at(row: &[String], index: Option<usize>) -> f64 {
    index
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
        .map_or(f64::NAN, parse_coordinate)
}

/// Maps each header to the row's raw cell.
///
/// Cells missing from a short row are left out. A repeated header keeps its
/// first position and takes the value of its last column.
pub fn row_properties(headers: &[String], row: &[String]) -> Map<String, Value> {
    let mut properties = Map::with_capacity(headers.len());
    for (header, cell) in headers.iter().zip(row) {
        properties.insert(header.clone(), Value::String(cell.clone()));
    }
    properties
}
