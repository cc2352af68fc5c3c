use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use mailsmith_model::Document;

/// Options for configuring the linter
#[derive(Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a document and return all scored findings
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check(document));
    }

    diagnostics
}

/// Advisory spam score in 0..=100: the sum of every rule's points, clamped.
/// Order-independent over the block sequence.
pub fn score_document(document: &Document) -> u8 {
    let total: u32 = lint_document(document, LintOptions::default())
        .iter()
        .map(|diagnostic| u32::from(diagnostic.points))
        .sum();

    total.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::{Block, BlockBody, BlockKind};

    fn text_block(content: &str) -> Block {
        let mut block = Block::new(BlockKind::Text);
        block.body = BlockBody::Text {
            content: content.to_string(),
        };
        block
    }

    #[test]
    fn test_empty_document_scores_zero() {
        assert_eq!(score_document(&Document::default()), 0);
    }

    #[test]
    fn test_uppercase_free_scores_thirty_five() {
        let mut document = Document::default();
        document.blocks.push(text_block("FREE"));

        // "free" (+20) and all-caps (+15)
        assert_eq!(score_document(&document), 35);
    }

    #[test]
    fn test_image_only_scores_thirty() {
        let mut document = Document::default();
        document.blocks.push(Block::new(BlockKind::Image));

        assert_eq!(score_document(&document), 30);
    }

    #[test]
    fn test_score_is_order_independent() {
        let mut document = Document::default();
        document.blocks.push(text_block("FREE GIFT"));
        document.blocks.push(text_block("BUY NOW"));
        let forward = score_document(&document);

        document.blocks.reverse();
        assert_eq!(score_document(&document), forward);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        // Every text rule at once: free + buy now + all caps
        let mut document = Document::default();
        document.blocks.push(text_block("FREE! BUY NOW!"));

        let score = score_document(&document);
        assert_eq!(score, 55);
        assert!(score <= 100);
    }

    #[test]
    fn test_lint_reports_each_finding_separately() {
        let mut document = Document::default();
        document.blocks.push(text_block("free stuff, buy now"));

        let diagnostics = lint_document(&document, LintOptions::default());
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.rule == "trigger-words"));
    }
}
