use std::path::PathBuf;

use thiserror::Error;

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: no datasets loaded")]
    NoDatasets,

    /// The dataset still has validation errors or no geometry.
    #[error("dataset {name} is not exportable ({errors} validation errors)")]
    InvalidDataset { name: String, errors: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write archive entry: {0}")]
    Write(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to serialize GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
