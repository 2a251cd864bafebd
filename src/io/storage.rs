use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Durable key-value storage over a directory.
///
/// Key `k` maps to `<dir>/k.json` holding the full JSON sequence; every write
/// replaces the value wholesale. There is no versioning: a value that no
/// longer decodes is treated as absent (and captured in the recovery log so
/// the next write doesn't silently destroy it).
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Storage {
        Storage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the sequence stored under `key`. Missing and malformed values are
    /// both treated as absent.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let path = self.value_path(key);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                recovery::log_recovery(
                    &self.dir,
                    RecoveryEntry {
                        timestamp: chrono::Utc::now(),
                        category: RecoveryCategory::Value,
                        description: "stored value does not decode".to_string(),
                        fields: vec![
                            ("Key".to_string(), key.to_string()),
                            ("Error".to_string(), e.to_string()),
                        ],
                        body: content,
                    },
                );
                None
            }
        }
    }

    /// Replace the sequence stored under `key`, atomically from the caller's
    /// perspective.
    pub fn write<T: Serialize>(&self, key: &str, value: &[T]) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
                key: key.to_string(),
                source: e,
            })?;
        let path = self.value_path(key);
        recovery::atomic_write(&path, content.as_bytes())
            .map_err(|e| StorageError::Write { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Todo;
    use tempfile::TempDir;

    #[test]
    fn write_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        let todos = vec![
            Todo::new(1, "Buy milk").unwrap(),
            Todo::new(2, "Water plants").unwrap(),
        ];
        storage.write("todos", &todos).unwrap();

        let loaded: Vec<Todo> = storage.load("todos").unwrap();
        assert_eq!(loaded, todos);
    }

    #[test]
    fn load_missing_key_returns_none() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        assert!(storage.load::<Todo>("todos").is_none());
    }

    #[test]
    fn load_malformed_value_returns_none_and_logs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("todos.json"), "not json {{{").unwrap();

        let storage = Storage::new(dir.path());
        assert!(storage.load::<Todo>("todos").is_none());

        let log = fs::read_to_string(recovery::recovery_log_path(dir.path())).unwrap();
        assert!(log.contains("stored value does not decode"));
        assert!(log.contains("not json {{{"));
    }

    #[test]
    fn keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());

        storage
            .write("todos", &[Todo::new(1, "Buy milk").unwrap()])
            .unwrap();
        assert!(storage.load::<Todo>("films").is_none());
    }
}
