//! Keyed JSON document storage.
//!
//! Each key is persisted as `<root>/<key>.json`. The contract is
//! deliberately forgiving: `load` falls back to the caller's default when a
//! document is missing or unreadable, and `save` reports failure as `false`.
//! Neither call panics or returns an error; problems are logged and the
//! caller decides what to tell the user.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load the document stored under `key`, or `default` if it was never
    /// saved or cannot be parsed.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.document_path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("failed to read {}: {err}", path.display());
                }
                return default;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                warn!("discarding unparseable {}: {err}", path.display());
                default
            }
        }
    }

    /// Save `value` under `key`. Returns false on any I/O or serialization
    /// failure.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        if let Err(err) = fs::create_dir_all(&self.root) {
            warn!("failed to create {}: {err}", self.root.display());
            return false;
        }
        let contents = match serde_json::to_string_pretty(value) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("failed to serialize {key}: {err}");
                return false;
            }
        };
        let path = self.document_path(key);
        match fs::write(&path, contents) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to write {}: {err}", path.display());
                false
            }
        }
    }
}
