use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};
use crate::geojson::GeoFeatureCollection;
use crate::roles::ColumnRoles;
use crate::table::RawTable;
use crate::validation::ValidationError;

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_OPACITY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(Uuid);

impl DatasetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How a dataset's points are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyling {
    /// Any CSS color; generated colors use `hsl(h, 70%, 50%)`.
    pub color: String,
    pub radius: f64,
    pub opacity: f64,
}

impl DatasetStyling {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            radius: DEFAULT_RADIUS,
            opacity: DEFAULT_OPACITY,
        }
    }

    pub fn apply(&mut self, update: StylingUpdate) {
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(radius) = update.radius {
            self.radius = radius;
        }
        if let Some(opacity) = update.opacity {
            self.opacity = opacity;
        }
    }
}

/// Partial styling change; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylingUpdate {
    pub color: Option<String>,
    pub radius: Option<f64>,
    pub opacity: Option<f64>,
}

impl StylingUpdate {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.radius.is_none() && self.opacity.is_none()
    }
}

/// One uploaded file after detection, validation and conversion.
///
/// Geometry is present exactly when both coordinate columns were detected
/// and validation produced no errors. Only the styling changes after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    id: DatasetId,
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: ColumnRoles,
    validation_errors: Vec<ValidationError>,
    geojson: Option<GeoFeatureCollection>,
    styling: DatasetStyling,
}

impl Dataset {
    /// Assembles a dataset, rejecting combinations that break the geometry rule.
    pub fn new(
        name: impl Into<String>,
        table: RawTable,
        columns: ColumnRoles,
        validation_errors: Vec<ValidationError>,
        geojson: Option<GeoFeatureCollection>,
        styling: DatasetStyling,
    ) -> Result<Self> {
        let name = name.into();
        let clean = validation_errors.is_empty() && columns.is_complete();
        match (clean, geojson.is_some()) {
            (true, false) => {
                return Err(ModelError::InconsistentDataset {
                    name,
                    message: "valid dataset is missing its geometry".to_string(),
                });
            }
            (false, true) => {
                return Err(ModelError::InconsistentDataset {
                    name,
                    message: "geometry present on a dataset that did not validate".to_string(),
                });
            }
            _ => {}
        }
        Ok(Self {
            id: DatasetId::new(),
            name,
            headers: table.headers,
            rows: table.rows,
            columns,
            validation_errors,
            geojson,
            styling,
        })
    }

    pub fn id(&self) -> &DatasetId {
        &self.id
    }

    /// Display name of the source file, extension included.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows with blank rows already removed.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnRoles {
        &self.columns
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    pub fn geojson(&self) -> Option<&GeoFeatureCollection> {
        self.geojson.as_ref()
    }

    pub fn styling(&self) -> &DatasetStyling {
        &self.styling
    }

    pub fn styling_mut(&mut self) -> &mut DatasetStyling {
        &mut self.styling
    }

    pub fn apply_styling(&mut self, update: StylingUpdate) {
        self.styling.apply(update);
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty() && self.geojson.is_some()
    }

    pub fn feature_count(&self) -> usize {
        self.geojson.as_ref().map_or(0, GeoFeatureCollection::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> ColumnRoles {
        ColumnRoles::new(Some("lat".to_string()), Some("lon".to_string()))
    }

    fn table() -> RawTable {
        RawTable::new(
            vec!["lat".to_string(), "lon".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
        )
    }

    #[test]
    fn valid_dataset_requires_geometry() {
        let err = Dataset::new(
            "a.csv",
            table(),
            roles(),
            Vec::new(),
            None,
            DatasetStyling::with_color("red"),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::InconsistentDataset { .. }));
    }

    #[test]
    fn invalid_dataset_rejects_geometry() {
        let err = Dataset::new(
            "a.csv",
            table(),
            roles(),
            vec![ValidationError::for_cell(0, "lat", Some("x"), "bad")],
            Some(GeoFeatureCollection::new("a", Vec::new())),
            DatasetStyling::with_color("red"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("did not validate"));
    }

    #[test]
    fn styling_updates_are_partial() {
        let mut dataset = Dataset::new(
            "a.csv",
            table(),
            roles(),
            Vec::new(),
            Some(GeoFeatureCollection::new("a", Vec::new())),
            DatasetStyling::with_color("hsl(10, 70%, 50%)"),
        )
        .expect("consistent dataset");
        dataset.apply_styling(StylingUpdate {
            radius: Some(8.0),
            ..StylingUpdate::default()
        });
        assert_eq!(dataset.styling().radius, 8.0);
        assert_eq!(dataset.styling().opacity, DEFAULT_OPACITY);
        assert_eq!(dataset.styling().color, "hsl(10, 70%, 50%)");
        assert!(dataset.is_valid());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(DatasetId::new(), DatasetId::new());
    }
}
