//! # Snapshot History
//!
//! Undo/redo over full document snapshots.
//!
//! ## Design
//!
//! - Every commit records the pre-mutation document on the undo stack
//!   (most recent last) and clears the redo stack
//! - Undo swaps the current document for the top undo snapshot, parking
//!   the current one on the redo stack
//! - Redo is the mirror image, so redo is only available in the window
//!   between an undo and the next fresh edit
//! - Depth is unbounded; snapshots are whole documents, not diffs

use mailsmith_model::Document;

/// Undo/redo stacks for document editing
#[derive(Debug, Default)]
pub struct History {
    /// Past states, most recent last
    undo_stack: Vec<Document>,

    /// Future states, most recent last
    redo_stack: Vec<Document>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation document for a fresh commit.
    ///
    /// Clears the redo stack: a new action invalidates the future.
    pub fn record(&mut self, before: Document) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Swap the current document for the most recent past snapshot.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Document) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.redo_stack.push(std::mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Swap the current document for the most recently undone snapshot.
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, current: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(std::mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
