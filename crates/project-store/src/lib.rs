//! Project Store
//!
//! Layered core of the project tracker:
//! - domain: the project record and its rules
//! - repository: storage seam and the single-slot JSON repository
//! - board: view-state controller with hydrate-then-persist sync

pub mod board;
pub mod config;
pub mod domain;
pub mod repository;

pub use board::{CreateDialog, EditSession, ProjectBoard, SyncState};
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use domain::{normalize_title, DomainError, DomainResult, Project, ProjectId};
pub use repository::{KeyValueStorage, MemoryStorage, ProjectRepository, SlotRepository, StorageError};
