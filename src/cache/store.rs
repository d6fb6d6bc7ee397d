//! Cache storage implementation.
//!
//! All entries live in one small JSON document. Every mutation reads the
//! document, changes it in memory, and replaces the file atomically, so a
//! concurrent reader sees either the old or the new document.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::entry::CacheEntry;
use crate::error::{Result, SkycastError};
use crate::location::{Location, LocationKey};
use crate::weather::WeatherSnapshot;

/// Version of the on-disk document layout.
pub const CACHE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CacheDocument {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<LocationKey, CacheEntry>,
}

impl Default for CacheDocument {
    fn default() -> Self {
        Self {
            version: CACHE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// Storage for cached forecasts.
pub struct CacheStore {
    /// Path of the cache document.
    path: PathBuf,
}

impl CacheStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is read or created until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the cache document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the entry for `key`.
    ///
    /// An unreadable or malformed cache file is treated as empty.
    pub fn get(&self, key: &LocationKey) -> Option<CacheEntry> {
        let entry = self.load_or_empty().entries.remove(key);
        match &entry {
            Some(e) => debug!(key = %key, fetched_at = %e.fetched_at, "Cache entry found"),
            None => debug!(key = %key, "No cache entry"),
        }
        entry
    }

    /// Store `snapshot` under `key`, replacing any previous entry.
    pub fn put(
        &self,
        key: &LocationKey,
        location: &Location,
        snapshot: &WeatherSnapshot,
        now: DateTime<Utc>,
    ) -> Result<CacheEntry> {
        let entry = CacheEntry::new(key.clone(), location.clone(), snapshot.clone(), now);

        let mut document = self.load_or_empty();
        document.entries.insert(key.clone(), entry.clone());
        self.save(&document)?;

        debug!(key = %key, "Cached forecast");
        Ok(entry)
    }

    /// All entries, most recently fetched first.
    pub fn list(&self) -> Vec<CacheEntry> {
        let mut entries: Vec<CacheEntry> = self.load_or_empty().entries.into_values().collect();
        entries.sort_by(|a, b| b.fetched_at.cmp(&a.fetched_at));
        entries
    }

    /// Remove the entry for `key`. Returns whether one existed.
    pub fn remove(&self, key: &LocationKey) -> Result<bool> {
        let mut document = self.load_or_empty();
        if document.entries.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&document)?;
        Ok(true)
    }

    /// Delete every entry. Returns how many there were.
    pub fn clear(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        let count = self.load_or_empty().entries.len();
        fs::remove_file(&self.path).map_err(|e| SkycastError::CacheWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(count)
    }

    /// Size of the cache file in bytes, 0 if absent.
    pub fn size_bytes(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    /// Read and decode the document.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    fn load(&self) -> Result<Option<CacheDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let read_error = |message: String| SkycastError::CacheRead {
            path: self.path.clone(),
            message,
        };

        let json = fs::read_to_string(&self.path).map_err(|e| read_error(e.to_string()))?;
        let document: CacheDocument =
            serde_json::from_str(&json).map_err(|e| read_error(e.to_string()))?;

        if document.version != CACHE_VERSION {
            return Err(read_error(format!(
                "unsupported cache version {}",
                document.version
            )));
        }
        Ok(Some(document))
    }

    fn load_or_empty(&self) -> CacheDocument {
        match self.load() {
            Ok(Some(document)) => document,
            Ok(None) => CacheDocument::default(),
            Err(e) => {
                warn!("{}; starting with an empty cache", e);
                CacheDocument::default()
            }
        }
    }

    /// Atomic write: write to temp file, then rename.
    fn save(&self, document: &CacheDocument) -> Result<()> {
        self.write_atomic(document)
            .map_err(|e| SkycastError::CacheWrite {
                path: self.path.clone(),
                message: format!("{:#}", e),
            })
    }

    fn write_atomic(&self, document: &CacheDocument) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory {:?}", dir))?;

        let json = serde_json::to_string_pretty(document).context("Failed to encode cache")?;
        // One temp file per writer; a shared name lets concurrent renames collide.
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {:?}", dir))?;
        temp.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write {:?}", temp.path()))?;
        temp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::fixtures::{noon, snapshot};
    use chrono::Duration;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> CacheStore {
        CacheStore::new(temp.path().join("skycast").join("forecast_cache.json"))
    }

    #[test]
    fn get_on_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.get(&Location::zagreb().cache_key()).is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn put_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let location = Location::zagreb();
        let key = location.cache_key();

        store.put(&key, &location, &snapshot(17.4), noon()).unwrap();

        let entry = store.get(&key).unwrap();
        assert_eq!(entry.snapshot, snapshot(17.4));
        assert_eq!(entry.fetched_at, noon());
        assert_eq!(entry.location, location);
    }

    #[test]
    fn entries_survive_a_new_store_instance() {
        let temp = TempDir::new().unwrap();
        let location = Location::zagreb();
        let key = location.cache_key();

        store_in(&temp)
            .put(&key, &location, &snapshot(9.5), noon())
            .unwrap();

        let reopened = store_in(&temp);
        assert_eq!(reopened.get(&key).unwrap().snapshot, snapshot(9.5));
    }

    #[test]
    fn put_overwrites_same_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let location = Location::zagreb();
        let key = location.cache_key();

        store.put(&key, &location, &snapshot(10.0), noon()).unwrap();
        let later = noon() + Duration::minutes(20);
        store.put(&key, &location, &snapshot(11.0), later).unwrap();

        let entries = store.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fetched_at, later);
        assert_eq!(entries[0].snapshot.current.temperature, 11.0);
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.get(&Location::zagreb().cache_key()).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn put_replaces_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "garbage").unwrap();

        let location = Location::zagreb();
        store
            .put(&location.cache_key(), &location, &snapshot(5.0), noon())
            .unwrap();

        assert!(store.get(&location.cache_key()).is_some());
    }

    #[test]
    fn unknown_version_is_treated_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"version":99,"entries":{}}"#).unwrap();

        assert!(store.list().is_empty());
    }

    #[test]
    fn document_layout_is_keyed_by_location() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let location = Location::zagreb();

        store
            .put(&location.cache_key(), &location, &snapshot(17.4), noon())
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(
            json["entries"]["45.815,15.982"]["fetched_at"],
            "2024-05-01T12:00:00Z"
        );
    }

    #[test]
    fn put_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let location = Location::zagreb();

        store
            .put(&location.cache_key(), &location, &snapshot(1.0), noon())
            .unwrap();

        let files: Vec<_> = fs::read_dir(store.path().parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(files, ["forecast_cache.json"]);
    }

    #[test]
    fn concurrent_writers_never_fail() {
        let temp = TempDir::new().unwrap();
        let path = store_in(&temp).path().to_path_buf();

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let store = CacheStore::new(path.clone());
                std::thread::spawn(move || {
                    let location = Location::new(format!("Place {}", i), 45.0 + i as f64, 15.0);
                    for n in 0..50 {
                        store
                            .put(&location.cache_key(), &location, &snapshot(n as f64), noon())
                            .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let store = CacheStore::new(path);
        assert!(!store.list().is_empty());
        let files = fs::read_dir(store.path().parent().unwrap()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[test]
    fn put_into_unwritable_location_fails() {
        let temp = TempDir::new().unwrap();
        // A regular file where the parent directory should be.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = CacheStore::new(blocker.join("forecast_cache.json"));
        let location = Location::zagreb();

        let err = store
            .put(&location.cache_key(), &location, &snapshot(1.0), noon())
            .unwrap_err();
        assert!(matches!(err, SkycastError::CacheWrite { .. }), "{:?}", err);
    }

    #[test]
    fn list_orders_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let zagreb = Location::zagreb();
        let split = Location::new("Split", 43.508, 16.44);

        store
            .put(&zagreb.cache_key(), &zagreb, &snapshot(1.0), noon())
            .unwrap();
        store
            .put(
                &split.cache_key(),
                &split,
                &snapshot(2.0),
                noon() + Duration::minutes(1),
            )
            .unwrap();

        let names: Vec<String> = store.list().into_iter().map(|e| e.location.name).collect();
        assert_eq!(names, vec!["Split", "Zagreb"]);
    }

    #[test]
    fn remove_entry() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let location = Location::zagreb();
        let key = location.cache_key();

        store.put(&key, &location, &snapshot(1.0), noon()).unwrap();

        assert!(store.remove(&key).unwrap());
        assert!(store.get(&key).is_none());
        assert!(!store.remove(&key).unwrap());
    }

    #[test]
    fn clear_reports_count_and_deletes_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let zagreb = Location::zagreb();
        let split = Location::new("Split", 43.508, 16.44);

        store
            .put(&zagreb.cache_key(), &zagreb, &snapshot(1.0), noon())
            .unwrap();
        store
            .put(&split.cache_key(), &split, &snapshot(2.0), noon())
            .unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(!store.path().exists());
        assert_eq!(store.clear().unwrap(), 0);
    }
}
