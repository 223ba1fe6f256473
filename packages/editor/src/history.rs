//! # Undo/Redo History
//!
//! A bounded linear log of full forest snapshots.
//!
//! ## Design
//!
//! - The log starts with one snapshot (the initial state) at index 0
//! - Pushing truncates everything after the current index, then appends
//! - When the log grows past its maximum length the oldest snapshot is evicted
//! - Undo/redo only move the index; snapshots are never rewritten
//! - Every snapshot handed out is a deep copy, so callers can mutate it freely
//!
//! ## Example
//!
//! ```rust
//! use pagecraft_editor::History;
//!
//! let mut history = History::new(vec![1]);
//! history.push(vec![1, 2]);
//!
//! assert_eq!(history.undo(), Some(vec![1]));
//! assert_eq!(history.redo(), Some(vec![1, 2]));
//! assert_eq!(history.redo(), None);
//! ```

use tracing::debug;

/// Maximum number of snapshots kept by [`History::new`]
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone)]
pub struct History<T> {
    /// Snapshots, oldest first
    snapshots: Vec<T>,

    /// Position of the live state within `snapshots`
    index: usize,

    /// Maximum number of snapshots (at least 1)
    max_len: usize,
}

impl<T: Clone> History<T> {
    /// History seeded with `initial`, capped at [`MAX_HISTORY`] snapshots
    pub fn new(initial: T) -> Self {
        Self::with_max_len(initial, MAX_HISTORY)
    }

    pub fn with_max_len(initial: T, max_len: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            max_len: max_len.max(1),
        }
    }

    /// Record a new state. Any redo-able future is discarded.
    pub fn push(&mut self, state: T) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(state);

        if self.snapshots.len() > self.max_len {
            let overflow = self.snapshots.len() - self.max_len;
            self.snapshots.drain(..overflow);
        }

        self.index = self.snapshots.len() - 1;
        debug!(index = self.index, len = self.snapshots.len(), "history push");
    }

    /// Step back one snapshot. `None` at the oldest retained snapshot.
    pub fn undo(&mut self) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        debug!(index = self.index, "history undo");
        Some(self.snapshots[self.index].clone())
    }

    /// Step forward one snapshot. `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        debug!(index = self.index, "history redo");
        Some(self.snapshots[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The snapshot at the current index
    pub fn current(&self) -> &T {
        &self.snapshots[self.index]
    }

    /// Drop every snapshot and start over from `initial`
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.index = 0;
    }
}
