//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser storage, in-memory maps, etc.

use crate::domain::Project;

/// Errors reported by a key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The runtime offers no durable storage
    Unavailable,
    /// The backend rejected the operation (quota, security policy, ...)
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value storage, shaped after the browser `Storage` API
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Durable copy of the whole project collection
///
/// Neither operation reports failure: a broken or missing store reads as an
/// empty collection and writes to it are dropped.
pub trait ProjectRepository {
    /// Load all stored projects in stored order
    fn load(&self) -> Vec<Project>;

    /// Replace the stored collection with `projects`
    fn save(&self, projects: &[Project]);
}
