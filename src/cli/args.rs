use std::path::PathBuf;

use clap::Args;

use super::parse::parse_threshold;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Document to analyze (`-` or omitted reads stdin)
    #[arg(conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze this literal text instead of a file
    #[arg(long)]
    pub text: Option<String>,

    /// Title reported for the document
    #[arg(long)]
    pub title: Option<String>,

    /// Skip cosine similarity
    #[arg(long)]
    pub no_cosine: bool,

    /// Skip lexical overlap
    #[arg(long)]
    pub no_lexical: bool,

    /// Skip the windowed-query heuristic
    #[arg(long)]
    pub no_ngram: bool,

    /// Also match paragraphs against the corpus
    #[arg(long)]
    pub passages: bool,

    /// Paragraph match threshold (0.0 - 1.0, requires --passages)
    #[arg(long, requires = "passages", value_parser = parse_threshold)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// First document (file path, or literal text with --text)
    pub first: String,

    /// Second document (file path, or literal text with --text)
    pub second: String,

    /// Treat both arguments as literal text
    #[arg(long)]
    pub text: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PassagesArgs {
    /// Document to match (`-` or omitted reads stdin)
    #[arg(conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Match this literal text instead of a file
    #[arg(long)]
    pub text: Option<String>,

    /// Minimum paragraph similarity (0.0 - 1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,
}
