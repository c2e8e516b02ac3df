//! Key/value storage backends for the persisted locale.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage file could not be read or written.
    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file is not a JSON object.
    #[error("Storage file is not a JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Synchronous string key/value storage, the shape of browser-local storage.
pub trait LocaleStorage {
    /// # Errors
    /// Returns `StorageError` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns `StorageError` when the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. Survives a "reload" only if the value is handed to
/// the next store, see `LocaleStore::into_storage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// Stored key/value pairs.
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self { entries: HashMap::from([(key.to_string(), value.to_string())]) }
    }
}

impl LocaleStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a JSON object file.
///
/// A missing file reads as empty storage. Entries written by others, string
/// or not, are kept on `set`; only a file that is not a JSON object at all
/// is replaced.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// JSON file holding every stored key.
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file; a missing file is an empty map.
    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }
}

impl LocaleStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_entries()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Malformed(e)) => {
                tracing::warn!(path = %self.path.display(), "Discarding malformed storage: {e}");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
