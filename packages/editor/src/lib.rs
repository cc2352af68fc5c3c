//! # Mailsmith Editor
//!
//! Core document editing engine for Mailsmith.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks + canvas state                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore + mutations           │
//! │  - Apply mutations with validation          │
//! │  - Snapshot history (undo/redo)             │
//! │  - Selection tracking                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html / linter: derived views       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The document is the source of truth**: compiled HTML and the spam
//!    score are derived views, recomputed after every commit
//! 2. **Snapshot history**: every commit pushes the pre-mutation document
//!    onto the undo stack and clears redo, so redo survives only until the
//!    next fresh edit
//! 3. **Validate before mutate**: a rejected mutation leaves no trace in
//!    the document, the history, or the selection
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailsmith_editor::{BlockPatch, DocumentStore};
//! use mailsmith_model::BlockKind;
//!
//! let mut store = DocumentStore::default();
//!
//! // Append a block with kind-appropriate defaults
//! let id = store.add_block(BlockKind::Text)?;
//!
//! // Patch it
//! store.update_block(id.clone(), BlockPatch {
//!     content: Some("Hello".to_string()),
//!     ..BlockPatch::default()
//! })?;
//!
//! // Step back
//! store.undo();
//! ```

mod history;
mod mutations;
mod pipeline;
mod store;

pub use history::History;
pub use mutations::{BlockPatch, Mutation, MutationError};
pub use pipeline::Pipeline;
pub use store::DocumentStore;
