//! File-backed key-value store
//!
//! All keys live in a single JSON object at `<store_dir>/storage.json`.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use showcase_types::{Result, StorageError};

use crate::kv::KeyValueStore;

/// Persistent key-value store backed by one JSON file
pub struct FileStore {
    store_path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Create or load a store.
    ///
    /// An unreadable or corrupt file is treated as empty; it is overwritten
    /// on the next write.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("storage.json");

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_else(|e| {
                tracing::warn!(path = %store_path.display(), error = %e, "storage file is corrupt, starting empty");
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Save store to disk
    fn save(&self, entries: &HashMap<String, String>) -> std::result::Result<(), StorageError> {
        let file = File::create(&self.store_path).map_err(|e| StorageError::IoError(e.to_string()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, entries).map_err(|e| StorageError::IoError(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.save(&next)?;
        self.entries = next;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> std::result::Result<(), StorageError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.save(&next)?;
        self.entries = next;
        Ok(())
    }
}
