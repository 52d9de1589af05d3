//! Transient UI state owned by the board: sync phase, edit session and the
//! creation dialog. None of it is persisted.

use crate::domain::ProjectId;

/// Whether the in-memory collection has been loaded from storage yet.
///
/// Writes are only allowed once `Hydrated`; otherwise the empty initial
/// collection would overwrite stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    NotHydrated,
    Hydrated,
}

/// Record currently being edited, with its unsaved field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
}

/// The "new project" dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateDialog {
    pub open: bool,
    pub title: String,
    pub description: String,
}
