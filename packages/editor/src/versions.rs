//! Named project snapshots, newest first

use crate::errors::EditorError;
use chrono::{DateTime, Utc};
use pagecraft_model::{generate_id, Project};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Author recorded when the host has no signed-in user
pub const DEFAULT_AUTHOR: &str = "Current User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVersion {
    pub id: String,

    /// `v{n}.0.0`, numbered from 1 in creation order
    pub version: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Deep copy of the project at creation time
    pub project: Project,

    pub created_at: DateTime<Utc>,
    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLog {
    versions: Vec<ProjectVersion>,
}

impl VersionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `project` under a new version number.
    ///
    /// Empty descriptions and branches are stored as absent; `author`
    /// defaults to [`DEFAULT_AUTHOR`].
    pub fn create(
        &mut self,
        project: &Project,
        name: &str,
        description: Option<&str>,
        branch: Option<&str>,
        author: Option<&str>,
    ) -> Result<&ProjectVersion, EditorError> {
        if name.trim().is_empty() {
            return Err(EditorError::EmptyVersionName);
        }

        let non_empty = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);
        let version = ProjectVersion {
            id: generate_id(),
            version: format!("v{}.0.0", self.versions.len() + 1),
            name: name.to_string(),
            description: non_empty(description),
            project: project.clone(),
            created_at: Utc::now(),
            created_by: author.unwrap_or(DEFAULT_AUTHOR).to_string(),
            branch: non_empty(branch),
        };
        debug!(version = %version.version, project_id = %project.id, "version created");

        self.versions.insert(0, version);
        Ok(&self.versions[0])
    }

    pub fn get(&self, id: &str) -> Option<&ProjectVersion> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// A copy of the project stored under version `id`
    pub fn restore(&self, id: &str) -> Result<Project, EditorError> {
        self.get(id)
            .map(|version| version.project.clone())
            .ok_or_else(|| EditorError::VersionNotFound(id.to_string()))
    }

    /// Newest first
    pub fn list(&self) -> &[ProjectVersion] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
