use crate::block::{Block, BlockId};
use serde::{Deserialize, Serialize};

/// Drop shadow applied to the inner content table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    None,
    Sm,
    Lg,
}

/// Canvas-level style applied to the inner fixed-width table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasStyle {
    pub background_color: String,
    pub border: bool,
    pub shadow: ShadowLevel,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            border: false,
            shadow: ShadowLevel::Sm,
        }
    }
}

/// The full editable state of one email: an ordered block sequence plus
/// canvas style. Order is the vertical stacking order of the compiled
/// output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub canvas: CanvasStyle,
    /// Suppresses the fixed brand-attribution footer row when true
    #[serde(default)]
    pub white_label: bool,
}

impl Document {
    pub fn find_block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn find_block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| &block.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|block| block.id.clone()).collect()
    }

    /// Array move: remove the dragged block and reinsert it at the position
    /// the target block held before removal. A permutation, never a swap:
    /// the relative order of every unmoved block is preserved.
    ///
    /// Returns false without touching the sequence when either id is
    /// missing or both ids name the same block.
    pub fn move_block(&mut self, dragged: &BlockId, target: &BlockId) -> bool {
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };
        if from == to {
            return false;
        }

        let block = self.blocks.remove(from);
        let insert_index = to.min(self.blocks.len());
        self.blocks.insert(insert_index, block);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    fn doc_with_blocks(count: usize) -> Document {
        let mut document = Document::default();
        for _ in 0..count {
            document.blocks.push(Block::new(BlockKind::Text));
        }
        document
    }

    #[test]
    fn test_move_block_to_front() {
        let mut document = doc_with_blocks(3);
        let ids = document.block_ids();

        assert!(document.move_block(&ids[2], &ids[0]));
        assert_eq!(document.block_ids(), vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]);
    }

    #[test]
    fn test_move_block_preserves_identity_set() {
        let mut document = doc_with_blocks(4);
        let mut before = document.block_ids();

        document.move_block(&before[1].clone(), &before[3].clone());

        let mut after = document.block_ids();
        before.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        after.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_block_onto_itself_is_noop() {
        let mut document = doc_with_blocks(2);
        let ids = document.block_ids();

        assert!(!document.move_block(&ids[0], &ids[0]));
        assert_eq!(document.block_ids(), ids);
    }

    #[test]
    fn test_move_block_missing_id_is_noop() {
        let mut document = doc_with_blocks(2);
        let ids = document.block_ids();
        let stranger = BlockId::generate();

        assert!(!document.move_block(&stranger, &ids[0]));
        assert!(!document.move_block(&ids[0], &stranger));
        assert_eq!(document.block_ids(), ids);
    }

    #[test]
    fn test_document_round_trips_as_camel_case_json() {
        let mut document = doc_with_blocks(1);
        document.white_label = true;
        document.canvas.border = true;

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["whiteLabel"], true);
        assert_eq!(json["canvas"]["backgroundColor"], "#ffffff");
        assert_eq!(json["canvas"]["shadow"], "sm");

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, document);
    }
}
