//! Project Board
//!
//! View-state controller: owns the in-memory project list, applies user
//! mutations and writes the list through to the repository once hydrated.

mod session;

#[cfg(test)]
mod proptests;

use log::{debug, info};

use crate::domain::{normalize_title, DomainError, DomainResult, Project, ProjectId};
use crate::repository::ProjectRepository;

pub use session::{CreateDialog, EditSession, SyncState};

pub struct ProjectBoard<R> {
    repo: R,
    projects: Vec<Project>,
    sync: SyncState,
    editing: Option<EditSession>,
    create: CreateDialog,
}

impl<R: ProjectRepository> ProjectBoard<R> {
    /// Empty, not yet hydrated board. Mutations are kept in memory only
    /// until [`hydrate`](Self::hydrate) runs.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            projects: Vec::new(),
            sync: SyncState::NotHydrated,
            editing: None,
            create: CreateDialog::default(),
        }
    }

    /// Board hydrated from `repo` right away
    pub fn open(repo: R) -> Self {
        let mut board = Self::new(repo);
        board.hydrate();
        board
    }

    /// Load the stored collection into memory, once.
    ///
    /// Never writes back. Later calls are ignored.
    pub fn hydrate(&mut self) {
        if self.sync == SyncState::Hydrated {
            return;
        }
        self.projects = self.repo.load();
        self.sync = SyncState::Hydrated;
        info!("[BOARD] Hydrated with {} projects", self.projects.len());
    }

    // ========================
    // Accessors
    // ========================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn is_hydrated(&self) -> bool {
        self.sync == SyncState::Hydrated
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<&ProjectId> {
        self.editing.as_ref().map(|session| &session.id)
    }

    pub fn is_editing(&self, id: &ProjectId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn create_dialog(&self) -> &CreateDialog {
        &self.create
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new project.
    ///
    /// Title and description are trimmed; a blank title is rejected without
    /// touching any state. On success the creation dialog is closed and its
    /// draft cleared.
    pub fn add(&mut self, title: &str, description: &str) -> DomainResult<ProjectId> {
        let title = normalize_title(title).map_err(|e| {
            debug!("[BOARD] Add rejected: {}", e);
            e
        })?;

        let project = Project::create(title, description.trim());
        let id = project.id().clone();
        self.projects.push(project);
        self.create = CreateDialog::default();
        self.persist();
        Ok(id)
    }

    /// Remove a project. Returns false if no project has this id.
    ///
    /// Deleting the project under edit cancels the edit.
    pub fn delete(&mut self, id: &ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id() != id);
        if self.projects.len() == before {
            return false;
        }
        if self.is_editing(id) {
            self.editing = None;
        }
        self.persist();
        true
    }

    /// Enter edit mode for `id`, seeding the draft from the stored values.
    /// Replaces any edit already in progress.
    pub fn start_edit(&mut self, id: &ProjectId) -> DomainResult<()> {
        let project = self
            .projects
            .iter()
            .find(|project| project.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("project {}", id)))?;

        self.editing = Some(EditSession {
            id: project.id().clone(),
            title: project.title().to_string(),
            description: project.description().to_string(),
        });
        Ok(())
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.title = title.into();
        }
    }

    pub fn set_edit_description(&mut self, description: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.description = description.into();
        }
    }

    /// Apply the edit draft and leave edit mode.
    ///
    /// A blank title is rejected and edit mode stays active.
    pub fn save_edit(&mut self) -> DomainResult<()> {
        let session = self
            .editing
            .as_ref()
            .ok_or_else(|| DomainError::NotFound("no project is being edited".into()))?;

        let title = normalize_title(&session.title).map_err(|e| {
            debug!("[BOARD] Edit of {} rejected: {}", session.id, e);
            e
        })?;
        let description = session.description.trim().to_string();
        let id = session.id.clone();
        self.editing = None;

        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id() == &id)
            .ok_or_else(|| DomainError::NotFound(format!("project {}", id)))?;
        project.revise(title, description);
        self.persist();
        Ok(())
    }

    /// Leave edit mode, dropping the draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ========================
    // Creation dialog
    // ========================

    pub fn open_create_dialog(&mut self) {
        self.create.open = true;
    }

    /// Hide the dialog. The draft is kept for the next time it opens.
    pub fn close_create_dialog(&mut self) {
        self.create.open = false;
    }

    pub fn set_create_title(&mut self, title: impl Into<String>) {
        self.create.title = title.into();
    }

    pub fn set_create_description(&mut self, description: impl Into<String>) {
        self.create.description = description.into();
    }

    /// [`add`](Self::add) using the dialog's draft
    pub fn submit_create(&mut self) -> DomainResult<ProjectId> {
        let CreateDialog { title, description, .. } = self.create.clone();
        self.add(&title, &description)
    }

    /// Write-through, skipped until hydrated
    fn persist(&self) {
        match self.sync {
            SyncState::Hydrated => self.repo.save(&self.projects),
            SyncState::NotHydrated => {
                debug!("[BOARD] Not hydrated yet, skipping save");
            }
        }
    }
}
