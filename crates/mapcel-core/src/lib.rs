//! Mapcel core: turns parsed tables into map-ready datasets.
//!
//! # Pipeline
//!
//! 1. **Strip** fully blank data rows
//! 2. **Detect** latitude/longitude columns from the headers
//! 3. **Validate** every coordinate cell (only when both columns were found)
//! 4. **Generate** a GeoJSON feature collection (only when validation is clean)
//! 5. **Style** the dataset with a random color and default radius/opacity
//!
//! Content problems never fail the pipeline; they are recorded on the
//! returned [`Dataset`]. Only structural parse failures are errors.
//!
//! [`Dataset`]: mapcel_model::Dataset

#![deny(unsafe_code)]

pub mod error;
pub mod geojson;
pub mod pipeline;
pub mod state;
pub mod styling;

pub use error::{PipelineError, Result};
pub use geojson::{generate_geojson, row_properties};
pub use pipeline::{
    build_dataset, build_dataset_with_rng, collection_name, process_csv_file,
    process_csv_file_with_options, process_csv_files, process_csv_files_with_options,
    process_csv_reader,
};
pub use state::AppState;
pub use styling::{hsl_color, random_color, random_styling};
