//! Tests for loading map settings from disk.

use std::fs;

use mapcel_model::{MapSettings, MapSettingsUpdate, ModelError};

#[test]
fn loads_settings_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("map.toml");
    fs::write(
        &path,
        "style_url = \"https://demotiles.maplibre.org/style.json\"\ninitial_zoom = 5.5\n",
    )
    .expect("write settings");

    let mut settings = MapSettings::default();
    settings.apply(MapSettingsUpdate::load(&path).expect("load settings"));
    assert_eq!(settings.style_url, "https://demotiles.maplibre.org/style.json");
    assert_eq!(settings.initial_zoom, 5.5);
    assert_eq!(settings.max_zoom, 22.0);
}

#[test]
fn missing_settings_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = MapSettingsUpdate::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ModelError::SettingsRead { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
