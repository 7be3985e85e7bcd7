use std::path::PathBuf;

use mapcel_core::AppState;
use mapcel_model::{Dataset, GeoFeatureCollection, ValidationError};

#[derive(Debug)]
pub struct RunResult {
    pub datasets: Vec<DatasetSummary>,
    pub failures: Vec<FileFailure>,
    pub outputs: Vec<PathBuf>,
    /// Why an output was not written.
    pub blocked: Option<String>,
    pub has_errors: bool,
}

impl RunResult {
    pub fn from_state(state: &AppState, failures: Vec<FileFailure>) -> Self {
        let datasets: Vec<DatasetSummary> = state
            .datasets()
            .iter()
            .map(DatasetSummary::from_dataset)
            .collect();
        let has_errors = !failures.is_empty() || datasets.iter().any(|d| !d.is_valid());
        Self {
            datasets,
            failures,
            outputs: Vec::new(),
            blocked: None,
            has_errors,
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.datasets.iter().filter(|d| !d.is_valid()).count()
    }
}

#[derive(Debug)]
pub struct DatasetSummary {
    pub name: String,
    pub rows: usize,
    pub lat_column: Option<String>,
    pub long_column: Option<String>,
    pub features: Option<usize>,
    pub color: String,
    pub errors: Vec<ValidationError>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name().to_string(),
            rows: dataset.rows().len(),
            lat_column: dataset.columns().lat_column.clone(),
            long_column: dataset.columns().long_column.clone(),
            features: dataset.geojson().map(GeoFeatureCollection::len),
            color: dataset.styling().color.clone(),
            errors: dataset.validation_errors().to_vec(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.features.is_some()
    }
}

/// A file that could not be parsed at all.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}
