//! UI Components
//!
//! Leptos components for the project page.

mod app_header;
mod new_project_dialog;
mod project_card;
mod project_editor;
mod project_grid;

pub use app_header::AppHeader;
pub use new_project_dialog::NewProjectDialog;
pub use project_card::ProjectCard;
pub use project_editor::ProjectEditor;
pub use project_grid::ProjectGrid;
