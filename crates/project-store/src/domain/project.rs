//! Project domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{DomainError, DomainResult};

/// Opaque project identifier.
///
/// Stored as a plain string so ids written by earlier builds stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A tracked project.
///
/// Fields are private: `id` and `created_at` are fixed at creation and only
/// the title and description can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    /// Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    created_at: i64,
}

impl Project {
    /// Creates a new record with a fresh id and the current time.
    ///
    /// Does not touch storage. Callers are expected to pass an already
    /// validated title, see [`normalize_title`].
    pub fn create(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Replace the editable fields. Identity and timestamp are left alone.
    pub(crate) fn revise(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }

    #[cfg(test)]
    pub(crate) fn fixture(id: &str, title: &str, description: &str, created_at: i64) -> Self {
        Self {
            id: ProjectId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            created_at,
        }
    }
}

/// Trim a user-entered title, rejecting it when nothing is left.
pub fn normalize_title(raw: &str) -> DomainResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidInput("title must not be empty".into()));
    }
    Ok(title.to_string())
}
