//! `plagscan init` command - write a default configuration
//!
//! Writes `plagscan.toml` (or the `--config` path) with every setting at
//! its default and creates the corpus directory with a sample document.
//! An existing configuration file is kept unless `--force` is given.

use std::path::Path;

use plagscan_core::config::{ScanConfig, CONFIG_FILE};
use plagscan_core::corpus::DirectoryCorpus;
use plagscan_core::error::{Result, ScanError};
use serde_json::json;
use tracing::info;

use crate::cli::Cli;
use crate::commands::print_json;

/// Execute the init command
pub fn execute(cli: &Cli, cwd: &Path, force: bool) -> Result<()> {
    let target = cli
        .config
        .clone()
        .unwrap_or_else(|| cwd.join(CONFIG_FILE));

    if target.exists() && !force {
        return Err(ScanError::already_exists(
            "configuration file",
            target.display(),
        ));
    }

    let mut config = ScanConfig::default();
    if let Some(corpus) = &cli.corpus {
        config.corpus.path = corpus.clone();
    }

    config.save(&target)?;
    DirectoryCorpus::from_config(&config.corpus).ensure_root()?;
    info!(config = %target.display(), corpus = %config.corpus.path.display(), "initialized");

    crate::output_by_format_result!(cli.format,
        json => print_json(&json!({
            "status": "ok",
            "config": target.display().to_string(),
            "corpus": config.corpus.path.display().to_string(),
        })),
        human => {
            if !cli.quiet {
                println!("Wrote {}", target.display());
                println!("Corpus directory: {}", config.corpus.path.display());
                println!();
                println!("Add reference .txt files to the corpus, then run `plagscan analyze FILE`.");
            }
        }
    )
}
