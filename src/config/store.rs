//! Shared preferences storage.
//!
//! Holds the live [`Preferences`] behind a lock and writes them back to
//! the config file after each update.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::{save_preferences, ConfigError};
use crate::config::types::Preferences;

/// Cloneable handle to the persisted preferences.
///
/// Clones share the same underlying values. A store without a path keeps
/// changes in memory only.
#[derive(Clone)]
pub struct PreferencesStore {
    inner: Arc<RwLock<Preferences>>,
    path: Option<PathBuf>,
}

impl PreferencesStore {
    /// Store backed by the config file at `path`.
    pub fn new(preferences: Preferences, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(preferences)),
            path: Some(path),
        }
    }

    /// Store that never touches disk.
    pub fn in_memory(preferences: Preferences) -> Self {
        Self {
            inner: Arc::new(RwLock::new(preferences)),
            path: None,
        }
    }

    /// Get a clone of the current preferences.
    pub fn get(&self) -> Preferences {
        self.inner.read().clone()
    }

    /// Apply `change` and persist the result.
    ///
    /// The in-memory value is updated even when the write fails, so the
    /// session keeps what the user chose; the error is returned for display.
    pub fn update<F>(&self, change: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Preferences),
    {
        let snapshot = {
            let mut guard = self.inner.write();
            change(&mut guard);
            guard.clone()
        };

        match &self.path {
            Some(path) => save_preferences(path, &snapshot),
            None => Ok(()),
        }
    }

    /// Config file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
