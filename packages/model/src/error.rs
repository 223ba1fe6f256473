//! Error types for the component model

use thiserror::Error;

/// Reported by the `try_*` tree operations when their target id is missing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Component type {0} cannot have children")]
    NotAContainer(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Cannot delete the last page of a project")]
    LastPage,

    #[error("Page name cannot be empty")]
    EmptyName,
}
