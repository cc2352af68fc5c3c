use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailsmith_model::{Block, BlockKind, Document};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let root = if args.path == "." {
        PathBuf::from(cwd)
    } else {
        PathBuf::from(&args.path)
    };

    let config_path = root.join(DEFAULT_CONFIG_NAME);
    if config_path.exists() {
        return Err(anyhow!("{} already exists", DEFAULT_CONFIG_NAME));
    }

    let config = Config::default();
    fs::create_dir_all(&root)?;
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    let src_dir = config.get_src_dir(&root.to_string_lossy());
    fs::create_dir_all(&src_dir)?;

    let mut starter = Document::default();
    starter.blocks.push(Block::new(BlockKind::Text));
    starter.blocks.push(Block::new(BlockKind::Button));
    let starter_path = src_dir.join("welcome.json");
    fs::write(&starter_path, serde_json::to_string_pretty(&starter)?)?;

    println!("{}", "Initialized Mailsmith project".green().bold());
    println!("  {} {}", "✓".green(), config_path.display());
    println!("  {} {}", "✓".green(), starter_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_scaffolds_config_and_starter() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();

        init(
            InitArgs {
                path: root.clone(),
            },
            &root,
        )
        .unwrap();

        assert!(dir.path().join(DEFAULT_CONFIG_NAME).exists());
        let starter = fs::read_to_string(dir.path().join("documents/welcome.json")).unwrap();
        let document: Document = serde_json::from_str(&starter).unwrap();
        assert_eq!(document.blocks.len(), 2);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{}").unwrap();

        let result = init(InitArgs { path: root.clone() }, &root);
        assert!(result.is_err());
    }
}
