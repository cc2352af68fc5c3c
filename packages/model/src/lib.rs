//! # Mailsmith Model
//!
//! Value types for one email's editable state: the ordered block sequence,
//! per-block style, and canvas-level style.
//!
//! Block order is semantically meaningful: it is the literal vertical
//! stacking order of rows in the compiled email. Everything here is plain
//! data with serde derives; documents round-trip as camelCase JSON both on
//! disk and on the wire to the persistence collaborator.

mod block;
mod document;

pub use block::{Block, BlockBody, BlockId, BlockKind, BlockStyle, HorizontalAlign, VerticalAlign};
pub use document::{CanvasStyle, Document, ShadowLevel};
