//! Mapcel export generation.
//!
//! Turns validated datasets into a static-site bundle:
//!
//! - **GeoJSON**: one pretty-printed feature collection per dataset
//! - **map.js**: MapLibre GL JS code that loads and styles every collection
//! - **README.md**: usage instructions and a summary of the map settings
//! - **Zip archive**: all of the above in a single download

mod archive;
mod common;
mod error;
mod map_script;
mod readme;

pub use archive::{
    DEFAULT_EXPORT_FILE_NAME, MAP_SCRIPT_FILE_NAME, README_FILE_NAME, geojson_bytes,
    write_export_zip, write_export_zip_file, write_geojson_files,
};
pub use common::{export_file_names, geojson_file_name};
pub use error::{ExportError, Result};
pub use map_script::generate_map_script;
pub use readme::generate_readme;
