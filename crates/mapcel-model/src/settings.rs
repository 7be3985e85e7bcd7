//! Map settings for generated map code.
//!
//! Settings resolve in three layers: built-in defaults, an optional TOML
//! file, then explicit overrides (CLI flags). Each layer is a
//! [`MapSettingsUpdate`] applied on top of the previous one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::roles::CoordinateKind;

pub const DEFAULT_STYLE_URL: &str = "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub style_url: String,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub enable_controls: bool,
    /// `[longitude, latitude]`.
    pub initial_center: [f64; 2],
    pub initial_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            min_zoom: 0.0,
            max_zoom: 22.0,
            enable_controls: true,
            initial_center: [0.0, 0.0],
            initial_zoom: 2.0,
        }
    }
}

impl MapSettings {
    pub fn apply(&mut self, update: MapSettingsUpdate) {
        if let Some(style_url) = update.style_url {
            self.style_url = style_url;
        }
        if let Some(min_zoom) = update.min_zoom {
            self.min_zoom = min_zoom;
        }
        if let Some(max_zoom) = update.max_zoom {
            self.max_zoom = max_zoom;
        }
        if let Some(enable_controls) = update.enable_controls {
            self.enable_controls = enable_controls;
        }
        if let Some(initial_center) = update.initial_center {
            self.initial_center = initial_center;
        }
        if let Some(initial_zoom) = update.initial_zoom {
            self.initial_zoom = initial_zoom;
        }
    }

    /// Checks zoom ordering and that the center is a real coordinate.
    pub fn validate(&self) -> Result<()> {
        if self.style_url.trim().is_empty() {
            return Err(invalid("style_url must not be empty"));
        }
        if !(self.min_zoom.is_finite() && self.max_zoom.is_finite()) {
            return Err(invalid("zoom levels must be finite numbers"));
        }
        if self.min_zoom > self.max_zoom {
            return Err(invalid(format!(
                "min_zoom ({}) is greater than max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        if !self.initial_zoom.is_finite() {
            return Err(invalid("initial_zoom must be a finite number"));
        }
        let [longitude, latitude] = self.initial_center;
        if !CoordinateKind::Longitude.contains(longitude) {
            return Err(invalid(format!(
                "initial_center longitude {longitude} is outside -180..180"
            )));
        }
        if !CoordinateKind::Latitude.contains(latitude) {
            return Err(invalid(format!(
                "initial_center latitude {latitude} is outside -90..90"
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ModelError {
    ModelError::InvalidSettings {
        message: message.into(),
    }
}

/// Partial settings change; `None` keeps the current value.
///
/// This is also the shape of the TOML settings file, where every key is
/// optional and unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapSettingsUpdate {
    pub style_url: Option<String>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub enable_controls: Option<bool>,
    pub initial_center: Option<[f64; 2]>,
    pub initial_zoom: Option<f64>,
}

impl MapSettingsUpdate {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| ModelError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ModelError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_positron_world_view() {
        let settings = MapSettings::default();
        assert_eq!(settings.style_url, DEFAULT_STYLE_URL);
        assert_eq!(settings.min_zoom, 0.0);
        assert_eq!(settings.max_zoom, 22.0);
        assert!(settings.enable_controls);
        assert_eq!(settings.initial_center, [0.0, 0.0]);
        assert_eq!(settings.initial_zoom, 2.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let update = MapSettingsUpdate::from_toml_str(
            "max_zoom = 12\ninitial_center = [10.75, 59.91]\nenable_controls = false\n",
            Path::new("map.toml"),
        )
        .expect("parse settings");
        let mut settings = MapSettings::default();
        settings.apply(update);
        assert_eq!(settings.max_zoom, 12.0);
        assert_eq!(settings.initial_center, [10.75, 59.91]);
        assert!(!settings.enable_controls);
        assert_eq!(settings.style_url, DEFAULT_STYLE_URL);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = MapSettingsUpdate::from_toml_str("zoom = 3\n", Path::new("map.toml"))
            .expect_err("unknown key");
        assert!(matches!(err, ModelError::SettingsParse { .. }));
    }

    #[test]
    fn validate_checks_zoom_order_and_center() {
        let mut settings = MapSettings {
            min_zoom: 10.0,
            max_zoom: 4.0,
            ..MapSettings::default()
        };
        assert!(settings.validate().is_err());

        settings.max_zoom = 18.0;
        settings.initial_center = [200.0, 0.0];
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }
}
