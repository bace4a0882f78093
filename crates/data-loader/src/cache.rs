//! Process-lifetime memoization of catalog loads.
//!
//! Each distinct path is read at most once. The result of a failed load
//! (an empty catalog plus the error) is cached as well, so the problem is
//! reported once rather than on every refresh.

use crate::error::DataLoadError;
use crate::types::Catalog;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::error;

/// Result of loading one path: always a usable catalog, plus the error
/// that emptied it, if any
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: Arc<Catalog>,
    pub problem: Option<Arc<DataLoadError>>,
}

impl LoadOutcome {
    fn from_result(result: crate::Result<Catalog>) -> Self {
        match result {
            Ok(catalog) => Self {
                catalog: Arc::new(catalog),
                problem: None,
            },
            Err(e) => {
                error!("Catalog load failed: {e}");
                Self {
                    catalog: Arc::new(Catalog::new()),
                    problem: Some(Arc::new(e)),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.problem.is_none()
    }
}

/// Memoizes `Catalog::from_path` per path.
///
/// The map lock is only held long enough to find or create the cell for a
/// path; the load itself runs inside `OnceLock::get_or_init`, so
/// simultaneous first requests for the same path still read the file once
/// while loads of different paths do not block each other.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: Mutex<HashMap<PathBuf, Arc<OnceLock<LoadOutcome>>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, or return the outcome of the earlier load of it.
    pub fn load(&self, path: &Path) -> LoadOutcome {
        let cell = {
            let mut entries = self
                .entries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.entry(path.to_path_buf()).or_default().clone()
        };
        cell.get_or_init(|| LoadOutcome::from_result(Catalog::from_path(path)))
            .clone()
    }

    /// Shorthand for `load(path).catalog`
    pub fn catalog(&self, path: &Path) -> Arc<Catalog> {
        self.load(path).catalog
    }

    /// Whether `path` has been loaded already
    pub fn contains(&self, path: &Path) -> bool {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.get(path).is_some_and(|cell| cell.get().is_some())
    }

    /// Number of paths loaded so far
    pub fn len(&self) -> usize {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    const BODY: &str = "type,rating,release_year,date_added,country,director,cast,listed_in,duration\n\
                        Movie,PG,2020,2020-01-15,,,,\"Drama, Action\",90 min\n\
                        TV Show,TV-MA,2019,2019-06-01,,,,Comedy,2 Seasons\n";

    fn write_temp_csv(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(BODY.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_same_path_is_loaded_once() {
        let path = write_temp_csv("cache-once.csv");
        let cache = CatalogCache::new();

        let first = cache.catalog(&path);
        // Deleting the file proves the second call never touches disk
        std::fs::remove_file(&path).unwrap();
        let second = cache.catalog(&path);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&path));
    }

    #[test]
    fn test_reload_is_deterministic() {
        let path = write_temp_csv("cache-deterministic.csv");
        let a = CatalogCache::new().catalog(&path);
        let b = CatalogCache::new().catalog(&path);
        assert_eq!(*a, *b);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let cache = CatalogCache::new();
        let path = Path::new("no/such/catalog.csv");

        let outcome = cache.load(path);
        assert!(!outcome.is_ok());
        assert!(outcome.catalog.is_empty());
        assert!(outcome.problem.as_ref().unwrap().is_not_found());

        let again = cache.load(path);
        assert!(Arc::ptr_eq(&outcome.catalog, &again.catalog));
    }

    #[test]
    fn test_concurrent_first_access_shares_one_load() {
        let path = write_temp_csv("cache-concurrent.csv");
        let cache = Arc::new(CatalogCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = path.clone();
                std::thread::spawn(move || cache.catalog(&path))
            })
            .collect();
        let catalogs: Vec<Arc<Catalog>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for catalog in &catalogs[1..] {
            assert!(Arc::ptr_eq(&catalogs[0], catalog));
        }
        std::fs::remove_file(path).ok();
    }
}
