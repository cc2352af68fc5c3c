use crate::diagnostic::Diagnostic;
use crate::rules::SpamRule;
use mailsmith_model::{BlockKind, Document};

const IMAGE_ONLY_POINTS: u8 = 30;

/// Flags documents whose every block is an image
pub struct ImageOnlyRule;

impl SpamRule for ImageOnlyRule {
    fn name(&self) -> &'static str {
        "image-only"
    }

    fn description(&self) -> &'static str {
        "Flag messages with no text blocks at all"
    }

    fn check(&self, document: &Document) -> Vec<Diagnostic> {
        let all_images = !document.blocks.is_empty()
            && document
                .blocks
                .iter()
                .all(|block| block.kind() == BlockKind::Image);

        if all_images {
            vec![Diagnostic::warning(
                "image-only",
                "The message is images only, with no text or button blocks",
                IMAGE_ONLY_POINTS,
            )
            .with_suggestion("Add at least one text block")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::Block;

    #[test]
    fn test_flags_image_only_document() {
        let mut document = Document::default();
        document.blocks.push(Block::new(BlockKind::Image));
        document.blocks.push(Block::new(BlockKind::Image));

        assert_eq!(ImageOnlyRule.check(&document).len(), 1);
    }

    #[test]
    fn test_empty_document_is_not_image_only() {
        assert!(ImageOnlyRule.check(&Document::default()).is_empty());
    }

    #[test]
    fn test_any_text_block_clears_the_flag() {
        let mut document = Document::default();
        document.blocks.push(Block::new(BlockKind::Image));
        document.blocks.push(Block::new(BlockKind::Text));

        assert!(ImageOnlyRule.check(&document).is_empty());
    }
}
