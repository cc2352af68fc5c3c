//! # Document Mutations
//!
//! High-level semantic operations on the block sequence.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one operator action
//! 2. **Validated**: mutations check the document before touching it
//! 3. **Identity is immutable**: there is no re-type or re-id operation;
//!    replacing a block means removing and inserting
//!
//! ## Mutation Semantics
//!
//! ### UpdateBlock
//! - Merge semantics: only fields present in the patch are written
//! - Patch fields that do not apply to the block's kind are ignored
//!
//! ### MoveBlock
//! - Atomic array move to the target block's position
//! - A move onto itself is a legal no-op and does not commit
//!
//! ### RemoveBlock
//! - The store clears its selection if the removed block was selected

use mailsmith_model::{Block, BlockBody, BlockId, Document, HorizontalAlign, VerticalAlign};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Committing operations on an email document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new block to the end of the sequence
    InsertBlock { block: Block },

    /// Merge a field patch into the block with the given id
    UpdateBlock { id: BlockId, patch: BlockPatch },

    /// Remove the block with the given id
    RemoveBlock { id: BlockId },

    /// Append a copy of the block under a freshly generated identity
    DuplicateBlock { id: BlockId },

    /// Move `dragged` to the position currently held by `target`
    MoveBlock { dragged: BlockId, target: BlockId },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),
}

/// Partial update merged into an existing block.
///
/// Every field is optional; absent fields leave the block untouched, and
/// fields foreign to the block's kind (a `url` aimed at a text block) have
/// no effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_x: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_y: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

impl BlockPatch {
    fn merge_into(&self, block: &mut Block) {
        if let Some(color) = &self.color {
            block.style.color = color.clone();
        }
        if let Some(background_color) = &self.background_color {
            block.style.background_color = background_color.clone();
        }
        if let Some(font_size) = self.font_size {
            block.style.font_size = font_size;
        }
        if let Some(padding) = self.padding {
            block.style.padding = padding;
        }
        if let Some(align_x) = self.align_x {
            block.style.align_x = align_x;
        }
        if let Some(align_y) = self.align_y {
            block.style.align_y = align_y;
        }
        if let Some(radius) = self.radius {
            block.style.radius = radius;
        }

        match &mut block.body {
            BlockBody::Text { content } => {
                if let Some(new_content) = &self.content {
                    *content = new_content.clone();
                }
            }
            BlockBody::Image { src, width, height } => {
                if let Some(new_src) = &self.src {
                    *src = new_src.clone();
                }
                if let Some(new_width) = self.width {
                    *width = new_width;
                }
                if let Some(new_height) = self.height {
                    *height = new_height;
                }
            }
            BlockBody::Button { content, url } => {
                if let Some(new_content) = &self.content {
                    *content = new_content.clone();
                }
                if let Some(new_url) = &self.url {
                    *url = new_url.clone();
                }
            }
        }
    }
}

impl Mutation {
    /// Validate without applying
    pub fn validate(&self, document: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::InsertBlock { .. } => Ok(()),

            Mutation::UpdateBlock { id, .. }
            | Mutation::RemoveBlock { id }
            | Mutation::DuplicateBlock { id } => {
                if document.contains(id) {
                    Ok(())
                } else {
                    Err(MutationError::BlockNotFound(id.clone()))
                }
            }

            Mutation::MoveBlock { dragged, target } => {
                for id in [dragged, target] {
                    if !document.contains(id) {
                        return Err(MutationError::BlockNotFound(id.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// Apply to the document with validation. Returns whether the document
    /// changed: a `MoveBlock` onto itself validates but changes nothing.
    pub(crate) fn apply(&self, document: &mut Document) -> Result<bool, MutationError> {
        self.validate(document)?;

        match self {
            Mutation::InsertBlock { block } => {
                document.blocks.push(block.clone());
                Ok(true)
            }

            Mutation::UpdateBlock { id, patch } => {
                let block = document
                    .find_block_mut(id)
                    .ok_or_else(|| MutationError::BlockNotFound(id.clone()))?;
                patch.merge_into(block);
                Ok(true)
            }

            Mutation::RemoveBlock { id } => {
                let position = document
                    .position(id)
                    .ok_or_else(|| MutationError::BlockNotFound(id.clone()))?;
                document.blocks.remove(position);
                Ok(true)
            }

            Mutation::DuplicateBlock { id } => {
                let copy = document
                    .find_block(id)
                    .ok_or_else(|| MutationError::BlockNotFound(id.clone()))?
                    .duplicate();
                document.blocks.push(copy);
                Ok(true)
            }

            Mutation::MoveBlock { dragged, target } => Ok(document.move_block(dragged, target)),
        }
    }
}
