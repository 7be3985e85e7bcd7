//! Dataset pipeline: parsed table in, complete [`Dataset`] out.

use std::io::Read;
use std::path::{Path, PathBuf};

use mapcel_ingest::{IngestOptions, read_csv_reader, read_csv_table_with_options};
use mapcel_map::detect_coordinate_columns;
use mapcel_model::{Dataset, GeoFeatureCollection, RawTable, ValidationError};
use mapcel_validate::validate_dataset;
use rand::Rng;
use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::geojson::generate_geojson;
use crate::styling::random_styling;

/// Collection name for a source file: the file name without its last
/// extension. A name that is only a dot-prefixed word is kept as is.
pub fn collection_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// Runs detection, validation and conversion over a parsed table.
pub fn build_dataset(table: RawTable, source_name: &str) -> Result<Dataset> {
    build_dataset_with_rng(table, source_name, &mut rand::rng())
}

/// Same as [`build_dataset`] with a caller-supplied RNG for the color.
pub fn build_dataset_with_rng<R: Rng>(
    table: RawTable,
    source_name: &str,
    rng: &mut R,
) -> Result<Dataset> {
    let span = info_span!("dataset", source = source_name);
    let _guard = span.enter();

    let table = table.strip_blank_rows();
    let columns = detect_coordinate_columns(&table.headers);

    let (validation_errors, geojson) = match columns.both() {
        Some((lat_column, long_column)) => {
            let errors = validate_dataset(&table.rows, &table.headers, lat_column, long_column);
            let geojson = errors.is_empty().then(|| {
                generate_geojson(
                    &table.rows,
                    &table.headers,
                    lat_column,
                    long_column,
                    collection_name(source_name),
                )
            });
            (errors, geojson)
        }
        None => (vec![ValidationError::undetected_columns()], None),
    };

    if validation_errors.is_empty() {
        info!(
            rows = table.rows.len(),
            features = geojson.as_ref().map_or(0, GeoFeatureCollection::len),
            "dataset converted"
        );
    } else {
        warn!(
            rows = table.rows.len(),
            errors = validation_errors.len(),
            columns_detected = columns.is_complete(),
            "dataset has validation errors"
        );
    }

    let styling = random_styling(rng);
    let dataset = Dataset::new(
        source_name,
        table,
        columns,
        validation_errors,
        geojson,
        styling,
    )?;
    Ok(dataset)
}

/// Reads and converts one file. The dataset is named after the file name.
pub fn process_csv_file(path: &Path) -> Result<Dataset> {
    process_csv_file_with_options(path, &IngestOptions::default())
}

pub fn process_csv_file_with_options(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let table = read_csv_table_with_options(path, options)?;
    build_dataset(table, &display_name(path))
}

/// Reads and converts delimited text from any reader.
pub fn process_csv_reader<R: Read>(
    reader: R,
    source_name: &str,
    options: &IngestOptions,
) -> Result<Dataset> {
    let table = read_csv_reader(reader, source_name, options)?;
    build_dataset(table, source_name)
}

/// Processes files independently; a failure in one never stops the others.
pub fn process_csv_files(paths: &[PathBuf]) -> Vec<(PathBuf, Result<Dataset>)> {
    process_csv_files_with_options(paths, &IngestOptions::default())
}

pub fn process_csv_files_with_options(
    paths: &[PathBuf],
    options: &IngestOptions,
) -> Vec<(PathBuf, Result<Dataset>)> {
    paths
        .iter()
        .map(|path| {
            let result = process_csv_file_with_options(path, options);
            if let Err(error) = &result {
                warn!(path = %path.display(), %error, "failed to process file");
            }
            (path.clone(), result)
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_name_strips_last_extension() {
        assert_eq!(collection_name("sites.csv"), "sites");
        assert_eq!(collection_name("sites.2024.csv"), "sites.2024");
        assert_eq!(collection_name("sites"), "sites");
        assert_eq!(collection_name(".csv"), ".csv");
        assert_eq!(collection_name("Sites.CSV"), "Sites");
    }

    #[test]
    fn collection_name_keeps_inner_csv_extension() {
        assert_eq!(collection_name("data.csv.bak"), "data.csv");
        assert_eq!(collection_name("export.txt"), "export");
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/data/sites.csv")), "sites.csv");
    }
}
