//! Append-only local log of submitted bookings, stored as one JSON array under a
//! single key of a key-value store.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key-value store, the shape of browser local storage.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keeps each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

pub const BOOKINGS_KEY: &str = "bookings";

#[derive(Debug)]
pub struct LocalLog<S: StoragePort> {
    storage: S,
    key: String,
}

impl<S: StoragePort> LocalLog<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn bookings(storage: S) -> Self {
        Self::new(storage, BOOKINGS_KEY)
    }

    /// Read-modify-write: load the array, push `record`, store it back.
    /// Returns the new length.
    pub fn append<T: Serialize>(&mut self, record: &T) -> Result<usize, StorageError> {
        let mut entries = self.entries()?;
        entries.push(serde_json::to_value(record)?);
        let encoded = serde_json::to_string_pretty(&entries)?;
        self.storage.set(&self.key, &encoded)?;
        Ok(entries.len())
    }

    pub fn entries(&self) -> Result<Vec<Value>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
