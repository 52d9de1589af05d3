//! Application Context
//!
//! The project board shared via Leptos Context API.

use leptos::prelude::*;
use project_store::{ProjectBoard, Project, ProjectId, SlotRepository};

use crate::storage::BrowserStorage;

pub type BrowserBoard = ProjectBoard<SlotRepository<BrowserStorage>>;

/// App-wide board handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    board: RwSignal<BrowserBoard>,
}

impl AppContext {
    pub fn new(board: BrowserBoard) -> Self {
        Self {
            board: RwSignal::new(board),
        }
    }

    /// Read the board, subscribing the caller to changes
    pub fn with<U>(&self, f: impl FnOnce(&BrowserBoard) -> U) -> U {
        self.board.with(f)
    }

    /// Load stored projects into the board (first call only)
    pub fn hydrate(&self) {
        self.board.update(|board| board.hydrate());
    }

    pub fn projects(&self) -> Vec<Project> {
        self.board.with(|board| board.projects().to_vec())
    }

    pub fn is_editing(&self, id: &ProjectId) -> bool {
        self.board.with(|board| board.is_editing(id))
    }

    // ========================
    // Creation dialog
    // ========================

    pub fn open_create_dialog(&self) {
        self.board.update(|board| board.open_create_dialog());
    }

    pub fn close_create_dialog(&self) {
        self.board.update(|board| board.close_create_dialog());
    }

    pub fn set_create_title(&self, title: String) {
        self.board.update(|board| board.set_create_title(title));
    }

    pub fn set_create_description(&self, description: String) {
        self.board.update(|board| board.set_create_description(description));
    }

    /// Add a project from the dialog draft. Blank titles are ignored.
    pub fn submit_create(&self) {
        self.board.update(|board| {
            if let Ok(id) = board.submit_create() {
                log::info!("[APP] Added project {}", id);
            }
        });
    }

    // ========================
    // Card actions
    // ========================

    pub fn delete(&self, id: &ProjectId) {
        self.board.update(|board| {
            if board.delete(id) {
                log::info!("[APP] Deleted project {}", id);
            }
        });
    }

    pub fn start_edit(&self, id: &ProjectId) {
        self.board.update(|board| {
            if let Err(e) = board.start_edit(id) {
                log::debug!("[APP] Cannot edit: {}", e);
            }
        });
    }

    pub fn set_edit_title(&self, title: String) {
        self.board.update(|board| board.set_edit_title(title));
    }

    pub fn set_edit_description(&self, description: String) {
        self.board.update(|board| board.set_edit_description(description));
    }

    /// Apply the edit draft. A blank title keeps the editor open.
    pub fn save_edit(&self) {
        self.board.update(|board| {
            let _ = board.save_edit();
        });
    }

    pub fn cancel_edit(&self) {
        self.board.update(|board| board.cancel_edit());
    }
}
