use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use mailsmith_linter::{lint_document, score_document, DiagnosticLevel, LintOptions};
use mailsmith_model::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LintArgs {
    /// Document file to score
    pub path: PathBuf,
}

pub fn lint(args: LintArgs, _cwd: &str) -> Result<()> {
    let source =
        fs::read_to_string(&args.path).with_context(|| format!("reading {}", args.path.display()))?;
    let document: Document =
        serde_json::from_str(&source).with_context(|| format!("parsing {}", args.path.display()))?;

    let diagnostics = lint_document(&document, LintOptions::default());
    let score = score_document(&document);

    for diagnostic in &diagnostics {
        let level = match diagnostic.level {
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };
        println!(
            "{} [{}] {} (+{})",
            level, diagnostic.rule, diagnostic.message, diagnostic.points
        );
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("  {} {}", "hint:".dimmed(), suggestion);
        }
    }

    if diagnostics.is_empty() {
        println!("{}", "No spam findings".green());
    }

    println!();
    println!("Spam score: {}", format!("{}/100", score).bold());
    Ok(())
}
