//! File-backed key-value storage for client state.
//!
//! A flat map of string keys to string values, persisted as one JSON
//! file. The file is read once when the store is opened; every
//! mutation rewrites it synchronously. There is no retry or recovery
//! logic: an unreadable or corrupt file degrades to an empty store so
//! the client keeps running.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use friction_core::error::Result;

/// A small persistent string-to-string store.
pub struct KeyValueStorage {
    /// File the store is persisted to.
    path: PathBuf,
    /// In-memory view of the stored values.
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStorage {
    /// Opens the store at `path`, reading existing values once.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt
    /// file also yields an empty store, with a warning logged; it will
    /// be overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "client state file is corrupt, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "client state file is unreadable, starting empty"
                );
                HashMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Stores `value` under `key` and rewrites the file.
    ///
    /// The in-memory view is updated even when the write fails, so
    /// callers that swallow the error still see consistent state for
    /// the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be
    /// written.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let serialized = {
            let mut values = self.values.lock().unwrap();
            values.insert(key.to_string(), value.to_string());
            serde_json::to_string_pretty(&*values)?
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serialized)?;

        Ok(())
    }
}
