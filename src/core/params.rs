// src/core/params.rs

use std::collections::HashMap;
use std::path::PathBuf;

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::core::models::ParamKey;

/// Narrow durable key-value interface the parameter store persists
/// credentials through. The file-backed implementation is used by the
/// application; tests substitute an in-memory one.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// JSON-file key-value store living under the platform data directory.
/// Writes are fire-and-forget: a failed flush is logged and the
/// in-memory state keeps going.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) {
        let result = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| e.to_string())
            .and_then(|text| std::fs::write(&self.path, text).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "Failed to persist credential store.");
        }
    }
}

impl KeyStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

/// In-memory store standing in for the credential file in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl KeyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Current values for all tool-specific inputs.
///
/// Two invariants are enforced here rather than left to callers:
/// `network` and `country` are mutually exclusive (setting one clears
/// the other), and the three credential keys are mirrored to the
/// durable store on every change — non-empty persists, empty deletes.
pub struct ParameterSet {
    values: HashMap<ParamKey, String>,
    store: Box<dyn KeyStore>,
}

impl ParameterSet {
    /// Builds the set with every key empty, then seeds the credential
    /// keys from durable storage.
    pub fn new(store: Box<dyn KeyStore>) -> Self {
        let mut values = HashMap::new();
        for key in ParamKey::iter().filter(ParamKey::is_credential) {
            if let Some(value) = store.get(&key.to_string()) {
                debug!(%key, "Seeded credential from durable storage.");
                values.insert(key, value);
            }
        }
        Self { values, store }
    }

    /// Current value for `key`, `""` if unset.
    pub fn get(&self, key: ParamKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: ParamKey, value: impl Into<String>) {
        let value = value.into();

        // Network and country are alternative scopes for the same
        // request slot; the last one written wins.
        if !value.is_empty() {
            match key {
                ParamKey::Network => {
                    self.values.remove(&ParamKey::Country);
                }
                ParamKey::Country => {
                    self.values.remove(&ParamKey::Network);
                }
                _ => {}
            }
        }

        if key.is_credential() {
            let name = key.to_string();
            if value.is_empty() {
                self.store.remove(&name);
            } else {
                self.store.put(&name, &value);
            }
        }

        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }
}
