use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::DashboardError;

use super::loader::load_csv;
use super::model::Dataset;

struct CacheEntry {
    modified: Option<SystemTime>,
    dataset: Arc<Dataset>,
}

/// Memoizes loaded datasets by file path.
///
/// An entry is replaced when the file's modification time changes. Entries
/// are never evicted: the dashboard only ever looks at a handful of files.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on first access or
    /// after the file changed on disk.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>, DashboardError> {
        let modified = std::fs::metadata(path)
            .map_err(|e| DashboardError::Resource {
                path: path.to_path_buf(),
                source: e.into(),
            })?
            .modified()
            .ok();

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                log::debug!("Dataset cache hit for {}", path.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            log::info!("{} changed on disk, reloading", path.display());
        }

        let dataset = Arc::new(load_csv(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn games_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,Installs,Rating\nA,\"1,000+\",4.2\nB,10+,3.9").unwrap();
        file
    }

    #[test]
    fn test_second_access_returns_same_dataset() {
        let file = games_file();
        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(file.path()));
    }

    #[test]
    fn test_separate_caches_load_identical_datasets() {
        let file = games_file();
        let a = DatasetCache::new().get_or_load(file.path()).unwrap();
        let b = DatasetCache::new().get_or_load(file.path()).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let mut cache = DatasetCache::new();
        assert!(matches!(
            cache.get_or_load(&path),
            Err(DashboardError::Resource { .. })
        ));
        assert!(cache.is_empty());
    }
}
