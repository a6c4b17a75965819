//! CLI argument parsing for plagscan
//!
//! Global flags: --config, --corpus, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AnalyzeArgs, CompareArgs, PassagesArgs};
pub use plagscan_core::format::OutputFormat;
use parse::parse_format;

/// Plagscan - lexical plagiarism and similarity scanner
#[derive(Parser, Debug)]
#[command(name = "plagscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: $PLAGSCAN_CONFIG, ./plagscan.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference corpus directory, overriding the configured path
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default plagscan.toml and create the corpus directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Score a document against the reference corpus
    Analyze(AnalyzeArgs),

    /// Compare two documents directly
    Compare(CompareArgs),

    /// Find paragraphs that match corpus paragraphs
    Passages(PassagesArgs),

    /// Show corpus statistics
    Corpus,
}
