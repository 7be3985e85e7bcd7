use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use mapcel_core::{AppState, process_csv_files_with_options};
use mapcel_ingest::IngestOptions;
use mapcel_model::{Dataset, DatasetId, MapSettingsUpdate, StylingUpdate};
use mapcel_report::{write_export_zip_file, write_geojson_files};

use crate::cli::{ConvertArgs, ExportArgs, InputArgs, InspectArgs, MapArgs, StylingArgs};
use crate::logging::redact_value;
use crate::types::{FileFailure, RunResult};

pub fn run_inspect(args: &InspectArgs) -> Result<RunResult> {
    let span = info_span!("inspect", files = args.input.files.len());
    let _guard = span.enter();

    let (state, failures) = load_state(&args.input, AppState::new());
    Ok(RunResult::from_state(&state, failures))
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let span = info_span!("convert", output_dir = %args.output_dir.display());
    let _guard = span.enter();

    let (state, failures) = load_state(&args.input, AppState::new());
    let mut result = RunResult::from_state(&state, failures);

    let valid: Vec<Dataset> = state
        .datasets()
        .iter()
        .filter(|dataset| dataset.is_valid())
        .cloned()
        .collect();
    if valid.is_empty() {
        result.blocked = Some("no valid datasets to convert".to_string());
        return Ok(result);
    }
    result.outputs = write_geojson_files(&args.output_dir, &valid)
        .with_context(|| format!("write GeoJSON to {}", args.output_dir.display()))?;
    info!(files = result.outputs.len(), "GeoJSON written");
    Ok(result)
}

pub fn run_export(args: &ExportArgs) -> Result<RunResult> {
    let span = info_span!("export", output = %args.output.display());
    let _guard = span.enter();

    let mut state = AppState::new();
    if let Some(path) = &args.settings {
        let update = MapSettingsUpdate::load(path)
            .with_context(|| format!("load map settings from {}", path.display()))?;
        state.update_map_settings(update);
    }
    state.update_map_settings(map_settings_update(&args.map));
    state
        .map_settings()
        .validate()
        .context("invalid map settings")?;

    let (mut state, failures) = load_state(&args.input, state);
    let styling = styling_update(&args.styling);
    if !styling.is_empty() {
        let ids: Vec<DatasetId> = state.datasets().iter().map(|d| *d.id()).collect();
        for id in &ids {
            state.update_dataset_styling(id, styling.clone());
        }
    }

    let mut result = RunResult::from_state(&state, failures);
    if !result.failures.is_empty() || !state.all_datasets_valid() {
        let reason = if state.has_datasets() {
            format!(
                "export blocked: {} file(s) failed to load, {} dataset(s) have validation errors",
                result.failures.len(),
                result.invalid_count()
            )
        } else {
            "export blocked: no datasets loaded".to_string()
        };
        warn!("{reason}");
        result.blocked = Some(reason);
        result.has_errors = true;
        return Ok(result);
    }

    write_export_zip_file(&args.output, state.datasets(), state.map_settings())
        .with_context(|| format!("write export archive {}", args.output.display()))?;
    result.outputs.push(args.output.clone());
    Ok(result)
}

/// Processes every input file into `state`; unreadable files are returned
/// as failures.
fn load_state(input: &InputArgs, mut state: AppState) -> (AppState, Vec<FileFailure>) {
    let options = IngestOptions {
        // Validated as ASCII when parsed.
        delimiter: u8::try_from(input.delimiter).unwrap_or(b','),
        ..IngestOptions::default()
    };

    let mut failures = Vec::new();
    for (path, result) in process_csv_files_with_options(&input.files, &options) {
        match result {
            Ok(dataset) => {
                log_validation_errors(&dataset);
                state.add_dataset(dataset);
            }
            Err(error) => failures.push(FileFailure {
                path,
                message: error.to_string(),
            }),
        }
    }
    info!(
        loaded = state.datasets().len(),
        failed = failures.len(),
        "input files processed"
    );
    (state, failures)
}

fn log_validation_errors(dataset: &Dataset) {
    for error in dataset.validation_errors() {
        trace!(
            dataset = dataset.name(),
            row = error.row,
            column = %error.column,
            value = error.value.as_deref().map_or("", redact_value),
            message = %error.message,
            "validation error"
        );
    }
}

fn map_settings_update(args: &MapArgs) -> MapSettingsUpdate {
    MapSettingsUpdate {
        style_url: args.style_url.clone(),
        min_zoom: args.min_zoom,
        max_zoom: args.max_zoom,
        enable_controls: args.no_controls.then_some(false),
        initial_center: args.center,
        initial_zoom: args.initial_zoom,
    }
}

fn styling_update(args: &StylingArgs) -> StylingUpdate {
    StylingUpdate {
        color: args.color.clone(),
        radius: args.radius,
        opacity: args.opacity,
    }
}
