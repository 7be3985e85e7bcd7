//! End-to-end pipeline behavior over files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use mapcel_core::{PipelineError, process_csv_file, process_csv_files, process_csv_reader};
use mapcel_ingest::{IngestError, IngestOptions};
use mapcel_model::{Dataset, UNDETECTED_COLUMNS_MESSAGE};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn process_str(contents: &str, name: &str) -> Dataset {
    process_csv_reader(contents.as_bytes(), name, &IngestOptions::default()).expect("dataset")
}

#[test]
fn clean_file_becomes_feature_collection() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "sites.csv",
        b"name,Latitude,Longitude\nOslo,59.91,10.75\nBergen,60.39,5.32\n",
    );
    let dataset = process_csv_file(&path).expect("dataset");

    assert_eq!(dataset.name(), "sites.csv");
    assert!(dataset.is_valid());
    assert_eq!(dataset.columns().lat_column.as_deref(), Some("Latitude"));
    assert_eq!(dataset.columns().long_column.as_deref(), Some("Longitude"));

    let geojson = dataset.geojson().expect("geometry");
    assert_eq!(geojson.name, "sites");
    let coords: Vec<[f64; 2]> = geojson
        .features
        .iter()
        .map(|f| f.geometry.coordinates)
        .collect();
    assert_eq!(coords, vec![[10.75, 59.91], [5.32, 60.39]]);
    assert_eq!(geojson.features[0].properties["name"], "Oslo");
    assert_eq!(dataset.styling().radius, 5.0);
    assert_eq!(dataset.styling().opacity, 0.8);
    assert!(dataset.styling().color.starts_with("hsl("));
}

#[test]
fn blank_rows_are_not_data() {
    let dataset = process_str("lat,lon\n1,2\n , \n,\n3,4\n", "gaps.csv");
    assert_eq!(dataset.rows().len(), 2);
    assert_eq!(dataset.feature_count(), 2);
}

#[test]
fn errors_use_file_row_numbers_and_suppress_geometry() {
    let dataset = process_str("name,lat,lon\nA,45,-90\nB,abc,200\n", "bad.csv");

    assert!(!dataset.is_valid());
    assert!(dataset.geojson().is_none());
    let errors = dataset.validation_errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].row, 3);
    assert_eq!(errors[0].column, "lat");
    assert_eq!(errors[0].value.as_deref(), Some("abc"));
    assert_eq!(errors[0].message, "Not a valid number");
    assert_eq!(errors[1].row, 3);
    assert_eq!(errors[1].column, "lon");
    assert_eq!(errors[1].message, "Longitude must be between -180 and 180");
}

#[test]
fn undetected_columns_yield_single_guidance_error() {
    let dataset = process_str("name,city\nA,Oslo\n", "places.csv");

    assert!(!dataset.columns().is_complete());
    assert!(dataset.geojson().is_none());
    let errors = dataset.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, 0);
    assert_eq!(errors[0].column, "");
    assert_eq!(errors[0].message, UNDETECTED_COLUMNS_MESSAGE);
}

#[test]
fn header_only_file_is_valid_and_empty() {
    let dataset = process_str("lat,lon\n", "empty.csv");
    assert!(dataset.is_valid());
    assert_eq!(dataset.feature_count(), 0);
}

#[test]
fn unreadable_input_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "broken.csv", b"lat,lon\n\xff\xfe\x00,1\n");
    let err = process_csv_file(&path).expect_err("invalid utf-8");
    assert!(matches!(err, PipelineError::Parse(_)));
    assert!(err.to_string().starts_with("error parsing CSV: "));

    let missing = dir.path().join("missing.csv");
    let err = process_csv_file(&missing).expect_err("missing file");
    assert!(matches!(
        err,
        PipelineError::Parse(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn files_are_processed_independently() {
    let dir = TempDir::new().expect("tempdir");
    let good = write(&dir, "good.csv", b"lat,lon\n1,2\n");
    let bad = write(&dir, "bad.csv", b"name\nA\n");
    let missing = dir.path().join("missing.csv");

    let results = process_csv_files(&[good.clone(), missing.clone(), bad.clone()]);
    let paths: Vec<&Path> = results.iter().map(|(p, _)| p.as_path()).collect();
    assert_eq!(paths, vec![good.as_path(), missing.as_path(), bad.as_path()]);

    assert!(results[0].1.as_ref().is_ok_and(Dataset::is_valid));
    assert!(results[1].1.is_err());
    assert!(results[2].1.as_ref().is_ok_and(|d| !d.is_valid()));
}

#[test]
fn semicolon_delimited_input() {
    let options = IngestOptions {
        delimiter: b';',
        ..IngestOptions::default()
    };
    let dataset =
        process_csv_reader("lat;lng\n1,5;2\n".as_bytes(), "eu.csv", &options).expect("dataset");
    // "1,5" reads as 1 under lenient parsing.
    assert!(dataset.is_valid());
    let geojson = dataset.geojson().expect("geometry");
    assert_eq!(geojson.features[0].geometry.coordinates, [2.0, 1.0]);
}
