//! # Mailsmith Linter
//!
//! Advisory content checks over an email document. The headline output is
//! the spam score: an additive, order-independent number in 0..=100 that
//! the composer surfaces next to the preview. It never blocks a save or a
//! send.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{lint_document, score_document, LintOptions};
pub use rules::{AllCapsRule, ImageOnlyRule, RuleRegistry, SpamRule, TriggerWordsRule};
