mod all_caps;
mod image_only;
mod trigger_words;

pub use all_caps::AllCapsRule;
pub use image_only::ImageOnlyRule;
pub use trigger_words::TriggerWordsRule;

use crate::diagnostic::Diagnostic;
use mailsmith_model::Document;

/// Trait for implementing spam rules
pub trait SpamRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check the document, yielding zero or more scored findings
    fn check(&self, document: &Document) -> Vec<Diagnostic>;
}

/// Registry of all available spam rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn SpamRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(TriggerWordsRule),
                Box::new(AllCapsRule),
                Box::new(ImageOnlyRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn SpamRule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenated text-bearing content in sequence order. Button labels
/// count; image blocks contribute nothing.
pub(crate) fn text_content(document: &Document) -> String {
    document
        .blocks
        .iter()
        .filter_map(|block| block.text_content())
        .collect()
}
