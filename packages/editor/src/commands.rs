//! # Editor Commands
//!
//! The typed command interface of an [`EditSession`](crate::EditSession).
//! Every gesture of the editing surface (drop a palette item, edit a
//! property, press a shortcut, switch page) arrives as one command.
//!
//! Commands serialize as tagged JSON objects so non-Rust hosts can send them:
//!
//! ```json
//! { "type": "update", "id": "hero", "update": { "props": { "text": "Hi" } } }
//! { "type": "insertNew", "parentId": null, "kind": "heading" }
//! { "type": "undo" }
//! ```

use crate::shortcuts::EditorAction;
use pagecraft_model::{Component, ComponentType, ComponentUpdate, ProjectSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorCommand {
    /// Add a prepared component under `parent_id` (roots when `None`)
    #[serde(rename_all = "camelCase")]
    Insert {
        #[serde(default)]
        parent_id: Option<String>,
        component: Component,
    },

    /// Add a new empty component of the given type
    #[serde(rename_all = "camelCase")]
    InsertNew {
        #[serde(default)]
        parent_id: Option<String>,
        kind: ComponentType,
    },

    /// Merge a partial update into a component
    Update { id: String, update: ComponentUpdate },

    /// Remove a component and its subtree
    Delete { id: String },

    /// Put a deep copy of a component on the clipboard
    Copy { id: String },

    /// Add a fresh-id copy of the clipboard under `parent_id`
    #[serde(rename_all = "camelCase")]
    Paste {
        #[serde(default)]
        parent_id: Option<String>,
    },

    /// Insert a fresh-id copy right after the original
    Duplicate { id: String },

    /// Add a fresh-id copy of a built-in template
    #[serde(rename_all = "camelCase")]
    InsertTemplate {
        template_id: String,
        #[serde(default)]
        parent_id: Option<String>,
    },

    Undo,
    Redo,

    /// Select a component, or clear the selection with `None`
    Select {
        #[serde(default)]
        id: Option<String>,
    },

    SelectNext,
    SelectPrevious,

    AddPage { name: String },
    DeletePage { id: String },
    RenamePage { id: String, name: String },
    SwitchPage { id: String },

    UpdateSettings { settings: ProjectSettings },
}

impl EditorCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::Insert { .. } => "insert",
            EditorCommand::InsertNew { .. } => "insertNew",
            EditorCommand::Update { .. } => "update",
            EditorCommand::Delete { .. } => "delete",
            EditorCommand::Copy { .. } => "copy",
            EditorCommand::Paste { .. } => "paste",
            EditorCommand::Duplicate { .. } => "duplicate",
            EditorCommand::InsertTemplate { .. } => "insertTemplate",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::Select { .. } => "select",
            EditorCommand::SelectNext => "selectNext",
            EditorCommand::SelectPrevious => "selectPrevious",
            EditorCommand::AddPage { .. } => "addPage",
            EditorCommand::DeletePage { .. } => "deletePage",
            EditorCommand::RenamePage { .. } => "renamePage",
            EditorCommand::SwitchPage { .. } => "switchPage",
            EditorCommand::UpdateSettings { .. } => "updateSettings",
        }
    }
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// The current page's forest changed and was pushed onto history
    Committed,

    /// A component was added; `id` is the root of the inserted subtree
    Inserted { id: String },

    /// Nothing to do (undo at the oldest snapshot, empty update, ...)
    Unchanged,

    /// A component was copied to the clipboard
    Copied { id: String },

    /// The selection changed
    Selection { id: Option<String> },

    /// The current page changed or page metadata was edited
    Page { id: String },

    /// The project settings were replaced
    Settings,

    /// The action belongs to the host (preview, save, export, ...)
    Delegated { action: EditorAction },
}
