//! Command dispatch logic for plagscan
use std::env;
use std::path::Path;
use std::time::Instant;

use plagscan_core::config::ScanConfig;
use plagscan_core::corpus::DirectoryCorpus;
use plagscan_core::error::Result;
use plagscan_core::SimilarityAggregator;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;

    if let Commands::Init { force } = &cli.command {
        return commands::init::execute(cli, &cwd, *force);
    }

    let config = load_config(cli, &cwd)?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Analyze(args) => commands::analyze::execute(cli, config, args, start),
        Commands::Compare(args) => commands::compare::execute(cli, config, args),
        Commands::Passages(args) => commands::passages::execute(cli, config, args, start),
        Commands::Corpus => commands::corpus::execute(cli, config),
    }
}

/// Resolve configuration and apply command-line overrides
pub fn load_config(cli: &Cli, cwd: &Path) -> Result<ScanConfig> {
    let (mut config, source) = ScanConfig::resolve(cli.config.as_deref(), cwd)?;
    if let Some(corpus) = &cli.corpus {
        config.corpus.path = corpus.clone();
    }

    debug!(
        source = ?source,
        corpus = %config.corpus.path.display(),
        "config_resolved"
    );
    Ok(config)
}

/// Aggregator over the configured corpus directory
pub fn build_aggregator(config: ScanConfig) -> SimilarityAggregator<DirectoryCorpus> {
    let store = DirectoryCorpus::from_config(&config.corpus);
    SimilarityAggregator::new(config, store)
}
