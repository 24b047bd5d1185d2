// SPDX-License-Identifier: MPL-2.0
//! Local key-value storage for session and preference flags.
//!
//! Values are any `serde` type, kept as CBOR values in a map and written
//! through to `storage.cbor` in the app data directory on every change.
//! Like browser local storage, none of the operations fail loudly: writes
//! report success as a `bool` and reads fall back to a caller-supplied
//! default, with the cause logged.
//!
//! # Path Resolution
//!
//! 1. `load_from()` with an explicit base directory
//! 2. `LEARNHUB_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use crate::app::paths;
use crate::error::{Result, StorageError};
use ciborium::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// Key-value store backed by a CBOR file, or memory only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    entries: BTreeMap<String, Value>,
    path: Option<PathBuf>,
}

impl LocalStorage {
    /// Creates a store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store from the default location.
    ///
    /// Returns a tuple of (storage, optional_warning). An unreadable file
    /// yields an empty store bound to the same path, plus a warning for the
    /// user.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from a custom base directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(dir) = paths::get_app_data_dir_with_override(base_dir) else {
            tracing::warn!("no data directory; local storage is memory-only");
            return (Self::in_memory(), None);
        };
        let path = dir.join(STORAGE_FILE);

        if !path.exists() {
            return (Self::bound_to(path, BTreeMap::new()), None);
        }

        match read_entries(&path) {
            Ok(entries) => (Self::bound_to(path, entries), None),
            Err(err) => {
                tracing::error!(%err, path = %path.display(), "error reading local storage");
                (
                    Self::bound_to(path, BTreeMap::new()),
                    Some("Saved session data could not be read and was reset".to_string()),
                )
            }
        }
    }

    fn bound_to(path: PathBuf, entries: BTreeMap<String, Value>) -> Self {
        Self {
            entries,
            path: Some(path),
        }
    }

    /// File this store writes through to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stores `value` under `key`. Returns `false` if it could not be encoded
    /// or persisted.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let encoded = match Value::serialized(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::error!(key, %err, "error saving to local storage");
                return false;
            }
        };
        self.entries.insert(key.to_string(), encoded);
        self.flush()
    }

    /// Reads `key`, returning `default` when it is missing or does not decode
    /// as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(value) = self.entries.get(key) else {
            return default;
        };
        match value.deserialized() {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::error!(key, %err, "error reading from local storage");
                default
            }
        }
    }

    /// Reads a text value without decoding into a typed value.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_text)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`. Missing keys are not an error.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_none() {
            return true;
        }
        self.flush()
    }

    /// Removes every key.
    pub fn clear(&mut self) -> bool {
        self.entries.clear();
        self.flush()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the store to its file. In-memory stores fail with
    /// [`StorageError::NoLocation`].
    pub fn persist(&self) -> Result<()> {
        let path = self.path.as_ref().ok_or(StorageError::NoLocation)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        ciborium::into_writer(&self.entries, BufWriter::new(file))?;
        Ok(())
    }

    fn flush(&self) -> bool {
        if self.path.is_none() {
            return true;
        }
        match self.persist() {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(%err, "error writing local storage");
                false
            }
        }
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, Value>> {
    let file = fs::File::open(path)?;
    let entries = ciborium::from_reader(BufReader::new(file))?;
    Ok(entries)
}
