//! # Document Store
//!
//! Exclusive owner of the live document, its history, and the current
//! selection. All committing operations flow through [`DocumentStore::apply`]:
//! snapshot first, mutate second, so a rejected mutation leaves no trace.

use crate::history::History;
use crate::mutations::{BlockPatch, Mutation, MutationError};
use mailsmith_model::{Block, BlockId, BlockKind, Document};

/// Owning handle over one editable email document
#[derive(Debug, Default)]
pub struct DocumentStore {
    document: Document,
    history: History,
    selection: Option<BlockId>,
}

impl DocumentStore {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            history: History::new(),
            selection: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> Option<&BlockId> {
        self.selection.as_ref()
    }

    /// Select a block, or clear the selection. Not a commit.
    pub fn select(&mut self, id: Option<BlockId>) {
        self.selection = id;
    }

    /// Apply a committing mutation.
    ///
    /// On success the pre-mutation document lands on the undo stack and
    /// redo is cleared. A validated no-op (moving a block onto itself)
    /// commits nothing.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), MutationError> {
        let before = self.document.clone();
        let changed = mutation.apply(&mut self.document)?;
        if !changed {
            return Ok(());
        }

        self.history.record(before);

        if let Mutation::RemoveBlock { id } = &mutation {
            if self.selection.as_ref() == Some(id) {
                self.selection = None;
            }
        }

        Ok(())
    }

    /// Append a new block with kind-appropriate defaults, returning its id
    pub fn add_block(&mut self, kind: BlockKind) -> Result<BlockId, MutationError> {
        let block = Block::new(kind);
        let id = block.id.clone();
        self.apply(Mutation::InsertBlock { block })?;
        Ok(id)
    }

    /// Merge a patch into the block with the given id
    pub fn update_block(&mut self, id: BlockId, patch: BlockPatch) -> Result<(), MutationError> {
        self.apply(Mutation::UpdateBlock { id, patch })
    }

    /// Remove the block with the given id
    pub fn remove_block(&mut self, id: BlockId) -> Result<(), MutationError> {
        self.apply(Mutation::RemoveBlock { id })
    }

    /// Append a copy of the block under a fresh identity
    pub fn duplicate_block(&mut self, id: BlockId) -> Result<(), MutationError> {
        self.apply(Mutation::DuplicateBlock { id })
    }

    /// Move `dragged` to the position currently held by `target`
    pub fn reorder(&mut self, dragged: BlockId, target: BlockId) -> Result<(), MutationError> {
        self.apply(Mutation::MoveBlock { dragged, target })
    }

    /// Undo the most recent commit. Returns false when history is empty.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.prune_selection();
        }
        undone
    }

    /// Redo the most recently undone commit. Returns false when the redo
    /// stack is empty.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.prune_selection();
        }
        redone
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selection {
            if !self.document.contains(id) {
                self.selection = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_undo_redo_walk() {
        let mut store = DocumentStore::default();

        store.add_block(BlockKind::Text).unwrap();
        store.add_block(BlockKind::Image).unwrap();
        assert_eq!(store.document().blocks.len(), 2);
        assert_eq!(store.history().undo_levels(), 2);

        assert!(store.undo());
        assert_eq!(store.document().blocks.len(), 1);
        assert_eq!(store.document().blocks[0].kind(), BlockKind::Text);

        assert!(store.undo());
        assert!(store.document().blocks.is_empty());

        assert!(store.redo());
        assert_eq!(store.document().blocks.len(), 1);
        assert_eq!(store.document().blocks[0].kind(), BlockKind::Text);
        assert_eq!(store.history().undo_levels(), 1);
        assert_eq!(store.history().redo_levels(), 1);
    }

    #[test]
    fn test_undo_redo_inverse_law() {
        let mut store = DocumentStore::default();
        let initial = store.document().clone();

        let first = store.add_block(BlockKind::Text).unwrap();
        store
            .update_block(
                first.clone(),
                BlockPatch {
                    content: Some("Hello".to_string()),
                    ..BlockPatch::default()
                },
            )
            .unwrap();
        store.add_block(BlockKind::Button).unwrap();
        store.duplicate_block(first).unwrap();
        let committed = store.history().undo_levels();
        let final_state = store.document().clone();

        for _ in 0..committed {
            assert!(store.undo());
        }
        assert!(!store.undo());
        assert_eq!(store.document(), &initial);

        for _ in 0..committed {
            assert!(store.redo());
        }
        assert!(!store.redo());
        assert_eq!(store.document(), &final_state);
    }

    #[test]
    fn test_fresh_commit_invalidates_redo() {
        let mut store = DocumentStore::default();
        store.add_block(BlockKind::Text).unwrap();
        store.add_block(BlockKind::Text).unwrap();

        assert!(store.undo());
        assert_eq!(store.history().redo_levels(), 1);

        store.add_block(BlockKind::Button).unwrap();
        assert_eq!(store.history().redo_levels(), 0);
        assert!(!store.redo());
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let mut store = DocumentStore::default();
        let a = store.add_block(BlockKind::Text).unwrap();
        let b = store.add_block(BlockKind::Image).unwrap();
        let c = store.add_block(BlockKind::Button).unwrap();

        store.reorder(c.clone(), a.clone()).unwrap();
        assert_eq!(store.document().block_ids(), vec![c, a, b]);
    }

    #[test]
    fn test_reorder_onto_itself_commits_nothing() {
        let mut store = DocumentStore::default();
        let a = store.add_block(BlockKind::Text).unwrap();
        let depth = store.history().undo_levels();

        store.reorder(a.clone(), a).unwrap();
        assert_eq!(store.history().undo_levels(), depth);
    }

    #[test]
    fn test_reorder_is_undoable() {
        let mut store = DocumentStore::default();
        let a = store.add_block(BlockKind::Text).unwrap();
        let b = store.add_block(BlockKind::Image).unwrap();
        let before = store.document().block_ids();

        store.reorder(b, a).unwrap();
        assert_ne!(store.document().block_ids(), before);

        assert!(store.undo());
        assert_eq!(store.document().block_ids(), before);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut store = DocumentStore::default();
        let id = store.add_block(BlockKind::Text).unwrap();
        store.select(Some(id.clone()));

        store.remove_block(id).unwrap();
        assert!(store.selection().is_none());
        assert!(store.document().blocks.is_empty());
    }

    #[test]
    fn test_remove_keeps_unrelated_selection() {
        let mut store = DocumentStore::default();
        let keep = store.add_block(BlockKind::Text).unwrap();
        let drop = store.add_block(BlockKind::Image).unwrap();
        store.select(Some(keep.clone()));

        store.remove_block(drop).unwrap();
        assert_eq!(store.selection(), Some(&keep));
    }

    #[test]
    fn test_rejected_mutation_leaves_no_trace() {
        let mut store = DocumentStore::default();
        store.add_block(BlockKind::Text).unwrap();
        let depth = store.history().undo_levels();
        let snapshot = store.document().clone();

        let result = store.remove_block(BlockId::generate());
        assert!(matches!(result, Err(MutationError::BlockNotFound(_))));
        assert_eq!(store.history().undo_levels(), depth);
        assert_eq!(store.document(), &snapshot);
    }

    #[test]
    fn test_duplicate_is_commit_backed() {
        let mut store = DocumentStore::default();
        let id = store.add_block(BlockKind::Button).unwrap();

        store.duplicate_block(id.clone()).unwrap();
        assert_eq!(store.document().blocks.len(), 2);
        assert_ne!(store.document().blocks[1].id, id);

        assert!(store.undo());
        assert_eq!(store.document().blocks.len(), 1);
    }
}
