//! Single-Slot Repository
//!
//! Keeps the whole collection as one JSON array under one storage key.

use log::{debug, warn};

use super::traits::{KeyValueStorage, ProjectRepository, StorageError};
use crate::config::StoreConfig;
use crate::domain::Project;

pub struct SlotRepository<S> {
    storage: Option<S>,
    key: String,
}

impl<S: KeyValueStorage> SlotRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage: Some(storage), key: key.into() }
    }

    /// Repository for a runtime without durable storage
    pub fn detached(key: impl Into<String>) -> Self {
        Self { storage: None, key: key.into() }
    }

    /// Build from an optional backend, e.g. the result of probing the browser
    pub fn from_config(storage: Option<S>, config: &StoreConfig) -> Self {
        Self { storage, key: config.storage_key.clone() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }

    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(&self.key)
    }
}

impl<S: KeyValueStorage> ProjectRepository for SlotRepository<S> {
    fn load(&self) -> Vec<Project> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(StorageError::Unavailable) => {
                debug!("[STORE] No storage available, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!("[STORE] Failed to read '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => {
                debug!("[STORE] Loaded {} projects from '{}'", projects.len(), self.key);
                projects
            }
            Err(e) => {
                warn!("[STORE] Discarding unreadable data under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, projects: &[Project]) {
        let Some(storage) = self.storage.as_ref() else {
            debug!("[STORE] No storage available, skipping save");
            return;
        };

        let raw = match serde_json::to_string(projects) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("[STORE] Failed to serialize projects: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set_item(&self.key, &raw) {
            warn!("[STORE] Failed to write '{}': {}", self.key, e);
        }
    }
}
