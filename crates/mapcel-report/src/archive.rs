//! GeoJSON files and zip packaging.

use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use mapcel_model::{Dataset, MapSettings};
use tracing::{debug, info};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::common::{ensure_exportable, export_file_names};
use crate::error::{ExportError, Result};
use crate::map_script::generate_map_script;
use crate::readme::generate_readme;

/// Default archive name offered for downloads.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "mapcel-export.zip";

pub const MAP_SCRIPT_FILE_NAME: &str = "map.js";

pub const README_FILE_NAME: &str = "README.md";

/// Pretty-printed (two-space) GeoJSON for a dataset.
pub fn geojson_bytes(dataset: &Dataset) -> Result<Vec<u8>> {
    let geojson = dataset
        .geojson()
        .ok_or_else(|| ExportError::InvalidDataset {
            name: dataset.name().to_string(),
            errors: dataset.validation_errors().len(),
        })?;
    Ok(serde_json::to_vec_pretty(geojson)?)
}

/// Writes the export archive: one GeoJSON per dataset, `map.js` and
/// `README.md`. Returns the underlying writer.
pub fn write_export_zip<W: Write + Seek>(
    writer: W,
    datasets: &[Dataset],
    settings: &MapSettings,
) -> Result<W> {
    ensure_exportable(datasets)?;

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);

    for (dataset, file_name) in datasets.iter().zip(export_file_names(datasets)) {
        let bytes = geojson_bytes(dataset)?;
        debug!(file = %file_name, bytes = bytes.len(), "adding GeoJSON to archive");
        zip.start_file(file_name, options)?;
        zip.write_all(&bytes)?;
    }

    zip.start_file(MAP_SCRIPT_FILE_NAME, options)?;
    zip.write_all(generate_map_script(datasets, settings).as_bytes())?;

    zip.start_file(README_FILE_NAME, options)?;
    zip.write_all(generate_readme(datasets, settings).as_bytes())?;

    Ok(zip.finish()?)
}

/// Writes the export archive to `path`, creating parent directories.
pub fn write_export_zip_file(
    path: &Path,
    datasets: &[Dataset],
    settings: &MapSettings,
) -> Result<()> {
    ensure_exportable(datasets)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = write_export_zip(BufWriter::new(file), datasets, settings)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), datasets = datasets.len(), "export archive written");
    Ok(())
}

/// Writes each dataset's GeoJSON into `dir` and returns the written paths.
pub fn write_geojson_files(dir: &Path, datasets: &[Dataset]) -> Result<Vec<PathBuf>> {
    ensure_exportable(datasets)?;
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut outputs = Vec::with_capacity(datasets.len());
    for (dataset, file_name) in datasets.iter().zip(export_file_names(datasets)) {
        let path = dir.join(file_name);
        let bytes = geojson_bytes(dataset)?;
        fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "GeoJSON written");
        outputs.push(path);
    }
    Ok(outputs)
}
