//! Domain Layer
//!
//! The project record and its rules.
//! This layer has no storage knowledge.

mod error;
mod project;

pub use error::{DomainError, DomainResult};
pub use project::{normalize_title, Project, ProjectId};
