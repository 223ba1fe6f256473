//! # Project Storage
//!
//! Synchronous persistence backends for whole projects.
//!
//! Stores are keyed by project id. Saving an existing id replaces the stored
//! project, a new id is appended. A store file that does not parse is logged
//! and read as empty.

use crate::errors::StorageError;
use pagecraft_model::Project;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_STORE_PATH: &str = ".pagecraft/projects.json";

pub trait ProjectStore {
    /// Insert or replace a project by id
    fn save(&mut self, project: &Project) -> Result<(), StorageError>;

    fn load(&self, id: &str) -> Result<Option<Project>, StorageError>;

    fn list(&self) -> Result<Vec<Project>, StorageError>;

    /// Remove a project. Unknown ids are ignored.
    fn delete(&mut self, id: &str) -> Result<(), StorageError>;
}

fn upsert(projects: &mut Vec<Project>, project: &Project) {
    match projects.iter_mut().find(|p| p.id == project.id) {
        Some(existing) => *existing = project.clone(),
        None => projects.push(project.clone()),
    }
}

/// Process-local store, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Vec<Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn save(&mut self, project: &Project) -> Result<(), StorageError> {
        upsert(&mut self.projects, project);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<Project>, StorageError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Project>, StorageError> {
        Ok(self.projects.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.projects.retain(|p| p.id != id);
        Ok(())
    }
}

/// All projects in one JSON array file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, projects: &[Project]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(projects)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = projects.len(), "project store written");
        Ok(())
    }
}

impl ProjectStore for FileStore {
    fn save(&mut self, project: &Project) -> Result<(), StorageError> {
        let mut projects = self.list()?;
        upsert(&mut projects, project);
        self.write_all(&projects)
    }

    fn load(&self, id: &str) -> Result<Option<Project>, StorageError> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    fn list(&self) -> Result<Vec<Project>, StorageError> {
        let source = match fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&source) {
            Ok(projects) => Ok(projects),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "project store is unreadable; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut projects = self.list()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() != before {
            self.write_all(&projects)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    pub kind: StorageKind,

    /// Store file, used by [`StorageKind::File`]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::File,
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

/// Build the backend a config asks for
pub fn open_store(config: &StorageConfig) -> Box<dyn ProjectStore> {
    match config.kind {
        StorageKind::File => Box::new(FileStore::new(&config.path)),
        StorageKind::Memory => Box::new(MemoryStore::new()),
    }
}
