//! Storage collaborator
//!
//! The store engine persists each list through this key-value abstraction.
//! Backends are deliberately dumb: string payloads in, string payloads out;
//! the engine owns serialization and all fallback behavior.

use crate::error::StorageError;
use dashmap::DashMap;
use std::fs;
use std::path::PathBuf;

/// External key-value collaborator the store engine writes through to.
/// Mirrors a browser's local storage: independent string payloads under
/// fixed keys.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `payload` under `key`, replacing any previous value.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Ephemeral in-memory backend, used by tests and throwaway sessions.
/// DashMap allows shared access without external Mutexes.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, e.g. to simulate a previous session's payload.
    pub fn seed(&self, key: &str, payload: &str) {
        self.entries.insert(key.to_string(), payload.to_string());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// Durable backend keeping one `<key>.json` file per list under a data
/// directory. Writes go to a temp file first and are renamed into place, so
/// a crash mid-write never leaves a half-written payload behind.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StorageError::Read {
                key: key.to_string(),
                source,
            })
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, payload).map_err(write_err)?;
        fs::rename(&temp_path, &path).map_err(write_err)?;
        Ok(())
    }
}
