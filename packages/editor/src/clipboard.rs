//! Single-slot component clipboard owned by an edit session

use pagecraft_model::{clone_with_fresh_ids, Component};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Component>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a deep copy of `component`, replacing whatever was there
    pub fn copy(&mut self, component: &Component) {
        debug!(id = %component.id, "copied to clipboard");
        self.slot = Some(component.clone());
    }

    /// A fresh-id copy of the stored component. Pasting twice yields two
    /// independent subtrees.
    pub fn paste(&self) -> Option<Component> {
        self.slot.as_ref().map(clone_with_fresh_ids)
    }

    pub fn has_clipboard(&self) -> bool {
        self.slot.is_some()
    }

    /// The stored component as copied, without regenerating ids
    pub fn peek(&self) -> Option<&Component> {
        self.slot.as_ref()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
