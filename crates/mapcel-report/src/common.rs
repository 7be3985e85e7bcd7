//! Shared helpers for export generation.

use std::collections::HashSet;

use mapcel_core::collection_name;
use mapcel_model::Dataset;

use crate::error::{ExportError, Result};

/// GeoJSON file name for a dataset: the source name without its extension.
pub fn geojson_file_name(dataset: &Dataset) -> String {
    format!("{}.geojson", collection_name(dataset.name()))
}

/// File names for every dataset in export order.
///
/// Two uploads with the same name would overwrite each other inside the
/// archive, so later duplicates get a `-2`, `-3`, ... suffix.
pub fn export_file_names(datasets: &[Dataset]) -> Vec<String> {
    let mut used = HashSet::new();
    datasets
        .iter()
        .map(|dataset| {
            let stem = collection_name(dataset.name());
            let mut name = format!("{stem}.geojson");
            let mut counter = 2;
            while !used.insert(name.clone()) {
                name = format!("{stem}-{counter}.geojson");
                counter += 1;
            }
            name
        })
        .collect()
}

/// Export needs at least one dataset and geometry on every one.
pub(crate) fn ensure_exportable(datasets: &[Dataset]) -> Result<()> {
    if datasets.is_empty() {
        return Err(ExportError::NoDatasets);
    }
    match datasets.iter().find(|dataset| !dataset.is_valid()) {
        Some(dataset) => Err(ExportError::InvalidDataset {
            name: dataset.name().to_string(),
            errors: dataset.validation_errors().len(),
        }),
        None => Ok(()),
    }
}

/// Escapes a value for a single-quoted JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats a number the way JavaScript prints it in source.
pub(crate) fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
