//! File-backed cache provider.
//!
//! Persists the whole date→record map as a single JSON file. The file wraps
//! the map in a versioned envelope so the record shape can evolve without
//! breaking older files:
//!
//! ```json
//! { "version": 1, "entries": { "2026-08-23": { "phase": "...", "phaseEmoji": "..." } } }
//! ```
//!
//! # Fail-Open Loading
//!
//! A missing, unreadable, or malformed file never fails the operation: it is
//! logged and treated as an empty cache. The worst case is a refetch, which
//! is always safe.
//!
//! # Write Durability
//!
//! Every `put` rewrites the file via a temp file in the same directory
//! followed by a rename, so a crash mid-write leaves the previous snapshot
//! intact.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::traits::{CacheError, PhaseCache};
use crate::datekey::DateKey;
use crate::phase::PhaseRecord;

/// Current on-disk envelope version.
const ENVELOPE_VERSION: u32 = 1;

/// Versioned on-disk representation of the cache.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    entries: HashMap<DateKey, PhaseRecord>,
}

/// Durable phase cache backed by a single JSON file.
pub struct JsonFileCache {
    path: PathBuf,
    entries: RwLock<HashMap<DateKey, PhaseRecord>>,
}

impl JsonFileCache {
    /// Open the cache at `path`, creating parent directories as needed.
    ///
    /// The file itself is created lazily on the first `put`. Existing
    /// content that cannot be parsed is treated as empty (fail-open).
    ///
    /// # Errors
    ///
    /// Returns an error only when the parent directory cannot be created;
    /// unreadable content is never an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = Self::load_or_empty(&path);
        debug!(path = %path.display(), entries = entries.len(), "Opened phase cache");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file and clear all entries.
    pub fn clear(&self) -> Result<(), CacheError> {
        let mut entries = self.entries.write();
        entries.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the file, falling back to an empty map on any failure.
    fn load_or_empty(path: &Path) -> HashMap<DateKey, PhaseRecord> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Phase cache unreadable, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str::<Envelope>(&raw) {
            Ok(envelope) => envelope.entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Phase cache malformed, starting empty");
                HashMap::new()
            }
        }
    }

    /// Persist the current map. Callers must hold the write lock.
    fn persist(&self, entries: &HashMap<DateKey, PhaseRecord>) -> Result<(), CacheError> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            entries: entries.clone(),
        };
        let encoded = serde_json::to_vec_pretty(&envelope)?;

        // Temp file in the same directory so the rename stays on one filesystem.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PhaseCache for JsonFileCache {
    fn get(&self, key: &DateKey) -> Result<Option<PhaseRecord>, CacheError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &DateKey, record: PhaseRecord) -> Result<(), CacheError> {
        // Write lock spans the map update and the persist so concurrent
        // writers cannot interleave and drop each other's entries.
        let mut entries = self.entries.write();
        entries.insert(key.clone(), record);
        self.persist(&entries)
    }

    fn contains(&self, key: &DateKey) -> Result<bool, CacheError> {
        Ok(self.entries.read().contains_key(key))
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_moon() -> PhaseRecord {
        PhaseRecord {
            phase: "Full Moon".to_string(),
            phase_emoji: "🌕".to_string(),
        }
    }

    fn cache_path(dir: &TempDir) -> PathBuf {
        dir.path().join("phases.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::open(cache_path(&dir)).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::open(cache_path(&dir)).unwrap();
        let key = DateKey::normalize("2026-08-23").unwrap();

        cache.put(&key, full_moon()).unwrap();

        assert_eq!(cache.get(&key).unwrap(), Some(full_moon()));
        assert!(cache.contains(&key).unwrap());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = cache_path(&dir);
        let key = DateKey::normalize("2026-08-23").unwrap();

        {
            let cache = JsonFileCache::open(&path).unwrap();
            cache.put(&key, full_moon()).unwrap();
        }

        let reopened = JsonFileCache::open(&path).unwrap();
        assert_eq!(reopened.get(&key).unwrap(), Some(full_moon()));
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn test_malformed_file_fails_open_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = cache_path(&dir);
        fs::write(&path, "{not json at all").unwrap();

        let cache = JsonFileCache::open(&path).unwrap();
        assert!(cache.is_empty());

        // And the cache is usable afterwards.
        let key = DateKey::normalize("2026-08-23").unwrap();
        cache.put(&key, full_moon()).unwrap();
        assert!(cache.contains(&key).unwrap());
    }

    #[test]
    fn test_file_carries_version_envelope() {
        let dir = TempDir::new().unwrap();
        let path = cache_path(&dir);
        let cache = JsonFileCache::open(&path).unwrap();
        cache
            .put(&DateKey::normalize("2026-08-23").unwrap(), full_moon())
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["entries"]["2026-08-23"]["phase"], "Full Moon");
        assert_eq!(value["entries"]["2026-08-23"]["phaseEmoji"], "🌕");
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::open(cache_path(&dir)).unwrap();
        let key = DateKey::normalize("2026-08-23").unwrap();

        cache.put(&key, full_moon()).unwrap();
        let waxing = PhaseRecord {
            phase: "Waxing Crescent".to_string(),
            phase_emoji: "🌒".to_string(),
        };
        cache.put(&key, waxing.clone()).unwrap();

        assert_eq!(cache.get(&key).unwrap(), Some(waxing));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_removes_file_and_entries() {
        let dir = TempDir::new().unwrap();
        let path = cache_path(&dir);
        let cache = JsonFileCache::open(&path).unwrap();
        let key = DateKey::normalize("2026-08-23").unwrap();
        cache.put(&key, full_moon()).unwrap();

        cache.clear().unwrap();

        assert!(cache.is_empty());
        assert!(!path.exists());

        // Clearing again is a no-op, not an error.
        cache.clear().unwrap();
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("phases.json");
        let cache = JsonFileCache::open(&nested).unwrap();
        cache
            .put(&DateKey::normalize("2026-08-23").unwrap(), full_moon())
            .unwrap();
        assert!(nested.exists());
    }
}
