//! Session state: the loaded datasets and the map configuration.

use mapcel_model::{Dataset, DatasetId, MapSettings, MapSettingsUpdate, StylingUpdate};
use tracing::debug;

/// Datasets in load order plus the settings of the exported map.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    datasets: Vec<Dataset>,
    map_settings: MapSettings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(map_settings: MapSettings) -> Self {
        Self {
            datasets: Vec::new(),
            map_settings,
        }
    }

    /// Appends a dataset; load order is kept.
    pub fn add_dataset(&mut self, dataset: Dataset) -> DatasetId {
        let id = *dataset.id();
        debug!(dataset = %id, name = dataset.name(), "dataset added");
        self.datasets.push(dataset);
        id
    }

    /// Returns `false` when no dataset has this id.
    pub fn remove_dataset(&mut self, id: &DatasetId) -> bool {
        let before = self.datasets.len();
        self.datasets.retain(|dataset| dataset.id() != id);
        let removed = self.datasets.len() != before;
        if removed {
            debug!(dataset = %id, "dataset removed");
        }
        removed
    }

    /// Merges a partial styling change into one dataset. Unknown ids are a no-op.
    pub fn update_dataset_styling(&mut self, id: &DatasetId, update: StylingUpdate) -> bool {
        match self.datasets.iter_mut().find(|dataset| dataset.id() == id) {
            Some(dataset) => {
                dataset.apply_styling(update);
                true
            }
            None => false,
        }
    }

    pub fn update_map_settings(&mut self, update: MapSettingsUpdate) {
        self.map_settings.apply(update);
    }

    pub fn dataset(&self, id: &DatasetId) -> Option<&Dataset> {
        self.datasets.iter().find(|dataset| dataset.id() == id)
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn map_settings(&self) -> &MapSettings {
        &self.map_settings
    }

    pub fn has_datasets(&self) -> bool {
        !self.datasets.is_empty()
    }

    /// True when at least one dataset is loaded and every one is exportable.
    pub fn all_datasets_valid(&self) -> bool {
        self.has_datasets() && self.datasets.iter().all(Dataset::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use mapcel_model::RawTable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pipeline::build_dataset_with_rng;

    fn dataset(name: &str, csv_rows: &[&[&str]]) -> Dataset {
        let mut rows = csv_rows
            .iter()
            .map(|row| row.iter().map(|v| (*v).to_string()).collect::<Vec<_>>());
        let headers = rows.next().unwrap_or_default();
        let table = RawTable::new(headers, rows.collect());
        build_dataset_with_rng(table, name, &mut StdRng::seed_from_u64(7)).expect("dataset")
    }

    fn valid(name: &str) -> Dataset {
        dataset(name, &[&["lat", "lon"], &["1", "2"]])
    }

    fn invalid(name: &str) -> Dataset {
        dataset(name, &[&["name"], &["A"]])
    }

    #[test]
    fn empty_state_is_not_exportable() {
        let state = AppState::new();
        assert!(!state.has_datasets());
        assert!(!state.all_datasets_valid());
        assert_eq!(state.map_settings(), &MapSettings::default());
    }

    #[test]
    fn datasets_keep_load_order() {
        let mut state = AppState::new();
        state.add_dataset(valid("a.csv"));
        state.add_dataset(valid("b.csv"));
        let names: Vec<&str> = state.datasets().iter().map(Dataset::name).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        assert!(state.all_datasets_valid());
    }

    #[test]
    fn one_invalid_dataset_blocks_export() {
        let mut state = AppState::new();
        state.add_dataset(valid("a.csv"));
        let bad = state.add_dataset(invalid("b.csv"));
        assert!(!state.all_datasets_valid());
        assert!(state.remove_dataset(&bad));
        assert!(state.all_datasets_valid());
        assert!(!state.remove_dataset(&bad));
    }

    #[test]
    fn styling_updates_merge() {
        let mut state = AppState::new();
        let id = state.add_dataset(valid("a.csv"));
        let color = state.dataset(&id).map(|d| d.styling().color.clone());

        let update = StylingUpdate {
            radius: Some(9.0),
            ..StylingUpdate::default()
        };
        assert!(state.update_dataset_styling(&id, update));
        let styling = state.dataset(&id).map(|d| d.styling().clone()).expect("dataset");
        assert_eq!(styling.radius, 9.0);
        assert_eq!(Some(styling.color), color);

        assert!(!state.update_dataset_styling(&DatasetId::new(), StylingUpdate::default()));
    }

    #[test]
    fn map_settings_updates_merge() {
        let mut state = AppState::new();
        state.update_map_settings(MapSettingsUpdate {
            initial_zoom: Some(5.0),
            enable_controls: Some(false),
            ..MapSettingsUpdate::default()
        });
        let settings = state.map_settings();
        assert_eq!(settings.initial_zoom, 5.0);
        assert!(!settings.enable_controls);
        assert_eq!(settings.max_zoom, MapSettings::default().max_zoom);
    }
}
