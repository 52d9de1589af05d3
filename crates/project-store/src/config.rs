//! Store configuration.

/// Storage key of the project list; existing browser data lives here.
pub const DEFAULT_STORAGE_KEY: &str = "projects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the single storage slot holding the collection
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
