//! Frontend Configuration
//!
//! Compile-time defaults; the page reads no environment.

use project_store::StoreConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    /// Level passed to the browser console logger
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
