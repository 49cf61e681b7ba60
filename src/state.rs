use std::path::PathBuf;
use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::model::Dataset;
use crate::view::{render, Selection, ViewModel};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Visualization,
    Insights,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Summary, Tab::Visualization, Tab::Insights];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Summary => "📄 Data Summary",
            Tab::Visualization => "📊 Visualization",
            Tab::Insights => "💡 Insights",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    cache: DatasetCache,

    /// File the current dataset (or load error) came from.
    pub data_path: PathBuf,

    /// Loaded dataset; `None` while `load_error` is set.
    pub dataset: Option<Arc<Dataset>>,

    /// Why the last load failed. Replaces the tabs with a failure screen.
    pub load_error: Option<String>,

    pub selection: Selection,

    pub tab: Tab,
}

impl AppState {
    /// Build the state and load the startup dataset.
    pub fn new(data_path: PathBuf) -> Self {
        let mut state = Self {
            cache: DatasetCache::new(),
            data_path: data_path.clone(),
            dataset: None,
            load_error: None,
            selection: Selection::default(),
            tab: Tab::default(),
        };
        state.load(data_path);
        state
    }

    /// Load `path` through the cache and make it the current dataset.
    pub fn load(&mut self, path: PathBuf) {
        match self.cache.get_or_load(&path) {
            Ok(dataset) => {
                // Keep the Y column across reloads as long as it still exists.
                if let Some(col) = &self.selection.y_column {
                    if !dataset.numeric_columns().contains(&col.as_str()) {
                        self.selection = Selection::default();
                    }
                }
                self.dataset = Some(dataset);
                self.load_error = None;
            }
            Err(e) => {
                let err = anyhow::Error::new(e);
                log::error!("Failed to load {}: {err:#}", path.display());
                self.dataset = None;
                self.load_error = Some(format!("{err:#}"));
            }
        }
        self.data_path = path;
    }

    /// Re-read the current file if it changed on disk.
    pub fn reload(&mut self) {
        self.load(self.data_path.clone());
    }

    pub fn set_y_column(&mut self, column: String) {
        self.selection.y_column = Some(column);
    }

    /// Everything the tabs draw for the current dataset and selection.
    pub fn view_model(&self) -> Option<ViewModel> {
        self.dataset
            .as_ref()
            .map(|ds| render(ds, &self.selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    #[test]
    fn test_startup_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        std::fs::write(&path, "Title,Installs,Rating,Reviews\nA,10+,4.0,3\nB,5+,4.5,9\n").unwrap();

        let mut state = AppState::new(path);
        assert!(state.load_error.is_none());
        let vm = state.view_model().unwrap();
        assert_eq!(vm.visualization.unwrap().y_column, "Rating");

        state.set_y_column("Reviews".into());
        state.reload();
        assert_eq!(state.selection.y_column.as_deref(), Some("Reviews"));
        let vm = state.view_model().unwrap();
        assert_eq!(vm.visualization.unwrap().y_column, "Reviews");
    }

    #[test]
    fn test_failed_load_shows_error_not_views() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("absent.csv"));
        assert!(state.dataset.is_none());
        assert!(state.view_model().is_none());
        assert!(state.load_error.as_deref().unwrap().contains("absent.csv"));
    }

    #[test]
    fn test_bad_installs_blocks_every_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        std::fs::write(&path, "Installs,Rating\nmany,4.0\n").unwrap();
        let state = AppState::new(path);
        assert!(state.view_model().is_none());
        assert!(state.load_error.as_deref().unwrap().contains("many"));
    }

    #[test]
    fn test_selection_dropped_when_column_disappears() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        std::fs::write(&first, "Installs,Price\n1+,0.5\n").unwrap();
        std::fs::write(&second, "Title,Genre\nA,Puzzle\n").unwrap();

        let mut state = AppState::new(first);
        state.set_y_column("Price".into());
        state.load(second);
        assert_eq!(state.selection, Selection::default());
        let vm = state.view_model().unwrap();
        assert_eq!(vm.visualization, Err(ConfigurationError::NoNumericColumns));
        assert_eq!(vm.summary.row_count, 1);
    }
}
