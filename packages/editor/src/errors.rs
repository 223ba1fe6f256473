//! Error types for the editor

use pagecraft_model::{ProjectError, TreeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("No component is selected")]
    NothingSelected,

    #[error("Clipboard is empty")]
    ClipboardEmpty,

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Version not found: {0}")]
    VersionNotFound(String),

    #[error("Version name cannot be empty")]
    EmptyVersionName,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
