//! Row-by-row validation of the detected coordinate columns.

use mapcel_model::{CoordinateKind, RawTable, ValidationError};
use tracing::debug;

use crate::coordinate::validate_coordinate;

/// Validates the latitude and longitude cell of every row.
///
/// Column names resolve to the first matching header. Each failing cell adds
/// one error, so a row contributes zero, one or two errors; within a row the
/// latitude error comes first. An unresolvable column name makes every cell
/// of that column count as missing.
pub fn validate_dataset(
    rows: &[Vec<String>],
    headers: &[String],
    lat_column: &str,
    long_column: &str,
) -> Vec<ValidationError> {
    let lat_index = headers.iter().position(|h| h == lat_column);
    let long_index = headers.iter().position(|h| h == long_column);
    let checks = [
        (CoordinateKind::Latitude, lat_column, lat_index),
        (CoordinateKind::Longitude, long_column, long_index),
    ];

    let mut errors = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        for (kind, column, index) in checks {
            let cell = index.and_then(|idx| row.get(idx)).map(String::as_str);
            if let Err(issue) = validate_coordinate(cell, kind) {
                errors.push(ValidationError::for_cell(
                    row_index,
                    column,
                    cell,
                    issue.to_string(),
                ));
            }
        }
    }

    debug!(
        rows = rows.len(),
        lat_column,
        long_column,
        errors = errors.len(),
        "validated coordinates"
    );
    errors
}

pub fn validate_table(
    table: &RawTable,
    lat_column: &str,
    long_column: &str,
) -> Vec<ValidationError> {
    validate_dataset(&table.rows, &table.headers, lat_column, long_column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn clean_rows_produce_no_errors() {
        let headers = strings(&["name", "lat", "lon"]);
        let rows = vec![strings(&["A", "45", "-90"]), strings(&["B", "-90", "180"])];
        assert!(validate_dataset(&rows, &headers, "lat", "lon").is_empty());
    }

    #[test]
    fn missing_cells_report_no_value() {
        let headers = strings(&["lat", "lon"]);
        let rows = vec![strings(&["10"])];
        let errors = validate_dataset(&rows, &headers, "lat", "lon");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].column, "lon");
        assert_eq!(errors[0].row, 2);
        assert_eq!(errors[0].value, None);
        assert_eq!(errors[0].message, "Not a valid number");
    }

    #[test]
    fn same_column_for_both_roles_is_checked_twice() {
        let headers = strings(&["latlong"]);
        let rows = vec![strings(&["120"])];
        let errors = validate_dataset(&rows, &headers, "latlong", "latlong");
        // Valid as a longitude, out of range as a latitude.
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Latitude must be between -90 and 90");
    }
}
