use crate::diagnostic::Diagnostic;
use crate::rules::{text_content, SpamRule};
use mailsmith_model::Document;

const FREE_POINTS: u8 = 20;
const BUY_NOW_POINTS: u8 = 20;

/// Keyword checks over the document's combined text content
pub struct TriggerWordsRule;

impl SpamRule for TriggerWordsRule {
    fn name(&self) -> &'static str {
        "trigger-words"
    }

    fn description(&self) -> &'static str {
        "Flag wording that commonly trips spam filters"
    }

    fn check(&self, document: &Document) -> Vec<Diagnostic> {
        let text = text_content(document).to_lowercase();
        let mut diagnostics = Vec::new();

        if text.contains("free") {
            diagnostics.push(
                Diagnostic::warning("trigger-words", "Content contains \"free\"", FREE_POINTS)
                    .with_suggestion("Rephrase the offer without the word \"free\""),
            );
        }

        if text.contains("buy now") {
            diagnostics.push(
                Diagnostic::warning(
                    "trigger-words",
                    "Content contains \"buy now\"",
                    BUY_NOW_POINTS,
                )
                .with_suggestion("Soften the call to action"),
            );
        }

        diagnostics
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
    fn test_detects_free_case_insensitively() {
        let diagnostics = TriggerWordsRule.check(&doc_with_text("Get it FrEe today"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].points, 20);
    }

    #[test]
    fn test_detects_buy_now_in_button_label() {
        let mut document = Document::default();
        let mut button = Block::new(BlockKind::Button);
        button.body = BlockBody::Button {
            content: "Buy Now".to_string(),
            url: "#".to_string(),
        };
        document.blocks.push(button);

        let diagnostics = TriggerWordsRule.check(&document);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_allows_clean_copy() {
        let diagnostics = TriggerWordsRule.check(&doc_with_text("Our spring catalog is here"));
        assert!(diagnostics.is_empty());
    }
}
