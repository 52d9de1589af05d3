//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod slot_repo;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStorage, ProjectRepository, StorageError};
pub use memory::MemoryStorage;
pub use slot_repo::SlotRepository;
