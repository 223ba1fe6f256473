//! # Pagecraft Editor
//!
//! Editing engine that sits between the visual canvas and the component
//! model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: canvas, panels, key events            │
//! └─────────────────────────────────────────────┘
//!                     ↓ EditorCommand / key chord
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - try_* tree operations on the live page   │
//! │  - sanitize incoming props                  │
//! │  - push every commit onto History (cap 50)  │
//! │  - clipboard, selection, pages, settings    │
//! └─────────────────────────────────────────────┘
//!                     ↓ Project
//! ┌─────────────────────────────────────────────┐
//! │ ProjectStore / VersionLog / exporters       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::{CommandOutcome, EditSession, EditorCommand};
//! use pagecraft_model::{ComponentType, Project};
//!
//! let mut session = EditSession::new(Project::new("Landing"));
//!
//! let outcome = session
//!     .apply(EditorCommand::InsertNew {
//!         parent_id: None,
//!         kind: ComponentType::Heading,
//!     })
//!     .unwrap();
//! assert!(matches!(outcome, CommandOutcome::Inserted { .. }));
//!
//! session.handle_key("Ctrl+Z").unwrap();
//! assert!(session.components().is_empty());
//! assert!(session.can_redo());
//! ```

mod clipboard;
mod commands;
mod errors;
mod history;
mod session;
pub mod shortcuts;
mod storage;
mod versions;

pub use clipboard::Clipboard;
pub use commands::{CommandOutcome, EditorCommand};
pub use errors::{EditorError, StorageError};
pub use history::{History, MAX_HISTORY};
pub use session::EditSession;
pub use shortcuts::{resolve, shortcuts_by_category, EditorAction, Shortcut, SHORTCUTS};
pub use storage::{
    open_store, FileStore, MemoryStore, ProjectStore, StorageConfig, StorageKind, DEFAULT_STORE_PATH,
};
pub use versions::{ProjectVersion, VersionLog, DEFAULT_AUTHOR};

// Re-export the model for hosts that only depend on the editor
pub use pagecraft_model as model;
