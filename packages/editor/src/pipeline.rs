//! # Editing Pipeline
//!
//! Coordinates the edit → derive cycle: Mutate → Compile → Score.
//!
//! Every commit, undo, or redo recomputes the compiled HTML and the spam
//! score from the latest document, so downstream consumers (preview,
//! save, the score readout) always observe the latest committed state.

use crate::mutations::{Mutation, MutationError};
use crate::store::DocumentStore;
use mailsmith_compiler_html::{compile_to_html, CompileOptions};
use mailsmith_linter::score_document;

/// Manages the full edit → derive pipeline
pub struct Pipeline {
    store: DocumentStore,
    options: CompileOptions,
    html: String,
    spam_score: u8,
}

impl Pipeline {
    /// Create a pipeline with default compile options
    pub fn new(store: DocumentStore) -> Self {
        Self::with_options(store, CompileOptions::default())
    }

    pub fn with_options(store: DocumentStore, options: CompileOptions) -> Self {
        let html = compile_to_html(store.document(), options.clone());
        let spam_score = score_document(store.document());
        Self {
            store,
            options,
            html,
            spam_score,
        }
    }

    /// Apply a committing mutation and refresh the derived views
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), MutationError> {
        self.store.apply(mutation)?;
        self.refresh();
        Ok(())
    }

    /// Undo the most recent commit, refreshing the derived views when
    /// anything changed
    pub fn undo(&mut self) -> bool {
        let undone = self.store.undo();
        if undone {
            self.refresh();
        }
        undone
    }

    /// Redo the most recently undone commit
    pub fn redo(&mut self) -> bool {
        let redone = self.store.redo();
        if redone {
            self.refresh();
        }
        redone
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Mutable store access for non-committing state such as selection
    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    /// Latest compiled HTML
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Latest spam score
    pub fn spam_score(&self) -> u8 {
        self.spam_score
    }

    fn refresh(&mut self) {
        self.html = compile_to_html(self.store.document(), self.options.clone());
        self.spam_score = score_document(self.store.document());
    }
}
