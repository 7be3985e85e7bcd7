//! Integration tests for the CLI commands.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use mapcel_cli::cli::{ConvertArgs, ExportArgs, InputArgs, InspectArgs, MapArgs, StylingArgs};
use mapcel_cli::commands::{run_convert, run_export, run_inspect};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn input(files: Vec<PathBuf>) -> InputArgs {
    InputArgs {
        files,
        delimiter: ',',
    }
}

fn export_args(files: Vec<PathBuf>, output: PathBuf) -> ExportArgs {
    ExportArgs {
        input: input(files),
        output,
        settings: None,
        map: MapArgs::default(),
        styling: StylingArgs::default(),
    }
}

fn read_entry(path: &Path, name: &str) -> String {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(File::open(path).expect("open zip")).expect("archive");
    let mut entry = archive.by_name(name).expect("entry");
    let mut contents = String::new();
    entry.read_to_string(&mut contents).expect("read entry");
    contents
}

#[test]
fn inspect_reports_invalid_and_unreadable_files() {
    let dir = TempDir::new().expect("tempdir");
    let good = write(dir.path(), "good.csv", "lat,lon\n1,2\n");
    let bad = write(dir.path(), "bad.csv", "lat,lon\n95,2\n");
    let missing = dir.path().join("missing.csv");

    let result = run_inspect(&InspectArgs {
        input: input(vec![good, bad, missing.clone()]),
    })
    .expect("inspect");

    assert!(result.has_errors);
    assert_eq!(result.datasets.len(), 2);
    assert!(result.datasets[0].is_valid());
    assert_eq!(result.datasets[1].errors.len(), 1);
    assert_eq!(result.datasets[1].errors[0].row, 2);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].path, missing);
    assert!(result.outputs.is_empty());
}

#[test]
fn convert_writes_only_valid_datasets() {
    let dir = TempDir::new().expect("tempdir");
    let good = write(dir.path(), "good.csv", "name,latitude,longitude\nA,1,2\n");
    let bad = write(dir.path(), "bad.csv", "name\nA\n");
    let out = dir.path().join("out");

    let result = run_convert(&ConvertArgs {
        input: input(vec![good, bad]),
        output_dir: out.clone(),
    })
    .expect("convert");

    assert!(result.has_errors);
    assert_eq!(result.outputs, vec![out.join("good.geojson")]);
    assert!(!out.join("bad.geojson").exists());
}

#[test]
fn export_builds_archive_with_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let sites = write(dir.path(), "sites.csv", "lat;lon\n59.91;10.75\n");
    let settings = write(
        dir.path(),
        "map.toml",
        "initial_zoom = 6\nmax_zoom = 18\nstyle_url = \"https://example.com/style.json\"\n",
    );
    let output = dir.path().join("bundle.zip");

    let mut args = export_args(vec![sites], output.clone());
    args.input.delimiter = ';';
    args.settings = Some(settings);
    args.map.max_zoom = Some(16.0);
    args.map.no_controls = true;
    args.styling.color = Some("#336699".to_string());

    let result = run_export(&args).expect("export");
    assert!(!result.has_errors);
    assert_eq!(result.outputs, vec![output.clone()]);
    assert_eq!(result.datasets[0].color, "#336699");

    let script = read_entry(&output, "map.js");
    assert!(script.contains("style: 'https://example.com/style.json',"));
    assert!(script.contains("zoom: 6,"));
    assert!(script.contains("maxZoom: 16,\n    interactive: false"));
    assert!(script.contains("'circle-color': '#336699',"));

    let readme = read_entry(&output, "README.md");
    assert!(readme.contains("- sites.geojson"));
    assert!(readme.contains("- Controls Enabled: false"));
}

#[test]
fn export_is_blocked_by_invalid_dataset() {
    let dir = TempDir::new().expect("tempdir");
    let good = write(dir.path(), "good.csv", "lat,lon\n1,2\n");
    let bad = write(dir.path(), "bad.csv", "lat,lon\nabc,2\n");
    let output = dir.path().join("bundle.zip");

    let result = run_export(&export_args(vec![good, bad], output.clone())).expect("export");

    assert!(result.has_errors);
    assert!(result.outputs.is_empty());
    assert!(
        result
            .blocked
            .as_deref()
            .is_some_and(|reason| reason.contains("1 dataset(s) have validation errors"))
    );
    assert!(!output.exists());
}

#[test]
fn export_rejects_bad_settings() {
    let dir = TempDir::new().expect("tempdir");
    let good = write(dir.path(), "good.csv", "lat,lon\n1,2\n");
    let settings = write(dir.path(), "map.toml", "zoom_level = 3\n");

    let mut args = export_args(vec![good.clone()], dir.path().join("a.zip"));
    args.settings = Some(settings);
    let err = run_export(&args).expect_err("unknown settings key");
    assert!(format!("{err:#}").contains("map.toml"));

    let mut args = export_args(vec![good], dir.path().join("b.zip"));
    args.map.min_zoom = Some(10.0);
    args.map.max_zoom = Some(5.0);
    assert!(run_export(&args).is_err());
}
