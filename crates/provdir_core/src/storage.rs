//! Persistence bridge.
//!
//! The directory persists through an injected key-value bridge, never
//! through ambient global state. The contract is deliberately flat:
//! `load` returns the blob stored under a key (or nothing), `save`
//! overwrites it. Serialization of the record sequence is the caller's
//! business.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::record::ProviderRecord;

/// The key the provider sequence is stored under.
pub const PROVIDERS_KEY: &str = "providers";

/// Environment variable overriding the on-disk store location.
pub const HOME_ENV: &str = "PROVDIR_HOME";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("home directory not found")]
    HomeNotFound,
}

/// Flat key-value persistence for the record blob.
pub trait StorageBridge {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the application home: `$PROVDIR_HOME` if set, else
    /// `~/.provider_directory`.
    pub fn open_default() -> Result<Self, StorageError> {
        if let Ok(override_path) = std::env::var(HOME_ENV) {
            return Ok(Self::at(override_path));
        }
        let home = dirs::home_dir().ok_or(StorageError::HomeNotFound)?;
        Ok(Self::at(home.join(".provider_directory")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBridge for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. to simulate an existing or corrupted blob.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .expect("mem store lock")
            .insert(key.into(), value.into());
        store
    }
}

impl StorageBridge for MemStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().expect("mem store lock").get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("mem store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

const SAMPLE_JSON: &str = include_str!("../assets/sample_providers.json");

/// The bundled sample dataset used to seed an empty store.
pub fn sample_providers() -> Vec<ProviderRecord> {
    serde_json::from_str(SAMPLE_JSON).expect("bundled sample dataset parses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::at(dir.path().join("nested"));
        assert!(store.load(PROVIDERS_KEY).unwrap().is_none());
        store.save(PROVIDERS_KEY, "[{\"x\":1}]").unwrap();
        assert_eq!(
            store.load(PROVIDERS_KEY).unwrap().as_deref(),
            Some("[{\"x\":1}]")
        );
    }

    #[test]
    fn file_store_save_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::at(dir.path());
        store.save("k", "one").unwrap();
        store.save("k", "two").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn mem_store_behaves_like_a_map() {
        let store = MemStore::with_entry("k", "v");
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
        assert!(store.load("other").unwrap().is_none());
        store.save("k", "v2").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn sample_dataset_is_non_empty_and_valid() {
        let sample = sample_providers();
        assert!(!sample.is_empty());
        for record in &sample {
            assert!(crate::validate::record_is_valid(record));
        }
    }
}
