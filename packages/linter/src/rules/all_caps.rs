use crate::diagnostic::Diagnostic;
use crate::rules::{text_content, SpamRule};
use mailsmith_model::Document;

const ALL_CAPS_POINTS: u8 = 15;

/// Flags a message written entirely in uppercase
pub struct AllCapsRule;

impl SpamRule for AllCapsRule {
    fn name(&self) -> &'static str {
        "all-caps"
    }

    fn description(&self) -> &'static str {
        "Flag messages shouted entirely in uppercase"
    }

    fn check(&self, document: &Document) -> Vec<Diagnostic> {
        let text = text_content(document);
        if !text.is_empty() && text == text.to_uppercase() {
            vec![Diagnostic::warning(
                "all-caps",
                "The entire message is uppercase",
                ALL_CAPS_POINTS,
            )
            .with_suggestion("Use sentence case for most of the copy")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::{Block, BlockBody, BlockKind};

    fn doc_with_text(content: &str) -> Document {
        let mut block = Block::new(BlockKind::Text);
        block.body = BlockBody::Text {
            content: content.to_string(),
        };
        let mut document = Document::default();
        document.blocks.push(block);
        document
    }

    #[test]
    fn test_flags_all_uppercase() {
        assert_eq!(AllCapsRule.check(&doc_with_text("LIMITED OFFER")).len(), 1);
    }

    #[test]
    fn test_allows_mixed_case() {
        assert!(AllCapsRule.check(&doc_with_text("Limited OFFER")).is_empty());
    }

    #[test]
    fn test_empty_document_is_not_shouting() {
        assert!(AllCapsRule.check(&Document::default()).is_empty());
    }
}
