use crate::config::Config;
use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use colored::Colorize;
use mailsmith_compiler_html::{compile_to_html, CompileOptions};
use mailsmith_model::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Document file to compile (defaults to every .json in the source directory)
    pub path: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Compact output without indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let files = match &args.path {
        Some(path) => vec![path.clone()],
        None => find_document_files(&config.get_src_dir(cwd))?,
    };

    if files.is_empty() {
        println!("{}", "No document files found".yellow());
        return Ok(());
    }

    let out_dir = args
        .out_dir
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.get_out_dir(cwd));

    println!("{}", "Compiling Mailsmith documents...".bright_blue().bold());

    let mut error_count = 0;
    for file in &files {
        match compile_file(file, &args, &out_dir) {
            Ok(output) => {
                println!("  {} {} → {}", "✓".green(), file.display(), output);
            }
            Err(error) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    file.display(),
                    error.to_string().red()
                );
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!("{} document(s) failed to compile", error_count));
    }
    Ok(())
}

fn compile_file(path: &Path, args: &CompileArgs, out_dir: &Path) -> Result<String> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let document: Document =
        serde_json::from_str(&source).with_context(|| format!("parsing {}", path.display()))?;

    let options = CompileOptions {
        pretty: !args.compact,
        ..CompileOptions::default()
    };
    let html = compile_to_html(&document, options);

    if args.stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    fs::create_dir_all(out_dir)?;
    let file_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document");
    let out_path = out_dir.join(format!("{}.html", file_stem));
    fs::write(&out_path, html)?;
    Ok(out_path.display().to_string())
}

fn find_document_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
