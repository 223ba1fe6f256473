//! # Keyboard Shortcuts
//!
//! The editor's keyboard shortcut table and a resolver from key chords to
//! [`EditorAction`]s. Chords are matched case-insensitively, `Cmd`/`Meta`
//! count as `Ctrl`, and modifier order does not matter, so `shift+CMD+z`
//! and `Ctrl + Shift + Z` are the same chord.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Something a key chord asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorAction {
    Undo,
    Redo,
    Copy,
    Paste,
    Duplicate,
    Delete,
    SelectAll,
    Deselect,
    SelectNext,
    SelectPrevious,
    TogglePreview,
    ShowShortcuts,
    Save,
    Export,
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::Copy => "copy",
            EditorAction::Paste => "paste",
            EditorAction::Duplicate => "duplicate",
            EditorAction::Delete => "delete",
            EditorAction::SelectAll => "selectAll",
            EditorAction::Deselect => "deselect",
            EditorAction::SelectNext => "selectNext",
            EditorAction::SelectPrevious => "selectPrevious",
            EditorAction::TogglePreview => "togglePreview",
            EditorAction::ShowShortcuts => "showShortcuts",
            EditorAction::Save => "save",
            EditorAction::Export => "export",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Display form, as shown in the shortcuts panel
    pub keys: &'static str,

    /// Canonical chords that trigger this shortcut
    #[serde(skip)]
    pub chords: &'static [&'static str],

    pub description: &'static str,
    pub category: &'static str,
    pub action: EditorAction,
}

pub const SHORTCUTS: &[Shortcut] = &[
    // Editing
    Shortcut {
        keys: "Ctrl + Z",
        chords: &["Ctrl+Z"],
        description: "Undo",
        category: "Editing",
        action: EditorAction::Undo,
    },
    Shortcut {
        keys: "Ctrl + Y",
        chords: &["Ctrl+Y"],
        description: "Redo",
        category: "Editing",
        action: EditorAction::Redo,
    },
    Shortcut {
        keys: "Ctrl + C",
        chords: &["Ctrl+C"],
        description: "Copy component",
        category: "Editing",
        action: EditorAction::Copy,
    },
    Shortcut {
        keys: "Ctrl + V",
        chords: &["Ctrl+V"],
        description: "Paste component",
        category: "Editing",
        action: EditorAction::Paste,
    },
    Shortcut {
        keys: "Ctrl + D",
        chords: &["Ctrl+D"],
        description: "Duplicate component",
        category: "Editing",
        action: EditorAction::Duplicate,
    },
    Shortcut {
        keys: "Delete / Backspace",
        chords: &["Delete", "Backspace"],
        description: "Delete selected component",
        category: "Editing",
        action: EditorAction::Delete,
    },
    Shortcut {
        keys: "Ctrl + A",
        chords: &["Ctrl+A"],
        description: "Select all components",
        category: "Editing",
        action: EditorAction::SelectAll,
    },
    // Navigation
    Shortcut {
        keys: "Esc",
        chords: &["Esc"],
        description: "Deselect component",
        category: "Navigation",
        action: EditorAction::Deselect,
    },
    Shortcut {
        keys: "Tab",
        chords: &["Tab"],
        description: "Select next component",
        category: "Navigation",
        action: EditorAction::SelectNext,
    },
    Shortcut {
        keys: "Shift + Tab",
        chords: &["Shift+Tab"],
        description: "Select previous component",
        category: "Navigation",
        action: EditorAction::SelectPrevious,
    },
    // View
    Shortcut {
        keys: "Ctrl + P",
        chords: &["Ctrl+P"],
        description: "Toggle preview mode",
        category: "View",
        action: EditorAction::TogglePreview,
    },
    Shortcut {
        keys: "Ctrl + /",
        chords: &["Ctrl+/"],
        description: "Show keyboard shortcuts",
        category: "View",
        action: EditorAction::ShowShortcuts,
    },
    // Actions
    Shortcut {
        keys: "Ctrl + S",
        chords: &["Ctrl+S"],
        description: "Save project",
        category: "Actions",
        action: EditorAction::Save,
    },
    Shortcut {
        keys: "Ctrl + E",
        chords: &["Ctrl+E"],
        description: "Export project",
        category: "Actions",
        action: EditorAction::Export,
    },
];

/// Shortcuts grouped by category, table order kept within each group
pub fn shortcuts_by_category() -> BTreeMap<&'static str, Vec<&'static Shortcut>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static Shortcut>> = BTreeMap::new();
    for shortcut in SHORTCUTS {
        groups.entry(shortcut.category).or_default().push(shortcut);
    }
    groups
}

/// Canonical form of a chord: `Ctrl`, `Alt`, `Shift` in that order, then the
/// key. Single letters are upper-cased. `None` for a chord without a key.
pub fn normalize_chord(chord: &str) -> Option<String> {
    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    let mut key: Option<String> = None;

    for part in chord.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" | "meta" | "super" => ctrl = true,
            "alt" | "option" | "opt" => alt = true,
            "shift" => shift = true,
            "esc" | "escape" => key = Some("Esc".to_string()),
            "del" | "delete" => key = Some("Delete".to_string()),
            "backspace" => key = Some("Backspace".to_string()),
            "tab" => key = Some("Tab".to_string()),
            "enter" | "return" => key = Some("Enter".to_string()),
            other if other.chars().count() == 1 => key = Some(other.to_ascii_uppercase()),
            _ => key = Some(part.to_string()),
        }
    }

    let key = key?;
    let mut out = String::new();
    if ctrl {
        out.push_str("Ctrl+");
    }
    if alt {
        out.push_str("Alt+");
    }
    if shift {
        out.push_str("Shift+");
    }
    out.push_str(&key);
    Some(out)
}

/// Find the shortcut a chord triggers
pub fn find_shortcut(chord: &str) -> Option<&'static Shortcut> {
    let chord = normalize_chord(chord)?;
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.chords.iter().any(|c| *c == chord))
}

/// Map a key chord such as `"Ctrl+Z"` to the action it triggers
pub fn resolve(chord: &str) -> Option<EditorAction> {
    find_shortcut(chord).map(|shortcut| shortcut.action)
}
