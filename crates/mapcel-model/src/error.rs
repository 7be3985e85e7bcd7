use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read settings file {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid map settings: {message}")]
    InvalidSettings { message: String },

    /// Geometry present on a dataset with errors, or missing on a clean one.
    #[error("inconsistent dataset {name}: {message}")]
    InconsistentDataset { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
