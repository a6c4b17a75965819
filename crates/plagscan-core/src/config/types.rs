//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::similarity::windowed::{DEFAULT_MAX_QUERIES, DEFAULT_WINDOW_SIZE};
use crate::similarity::CosineMode;

/// Default corpus directory, relative to the working directory
pub const DEFAULT_CORPUS_DIR: &str = "corpus";

/// Default cosine cutoff for reporting a reference as a similar passage
pub const DEFAULT_PASSAGE_CUTOFF: f64 = 0.7;

/// Default maximum preview length in characters
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Default paragraph similarity threshold for passage matching
pub const DEFAULT_PASSAGE_THRESHOLD: f64 = 0.7;

/// Paragraphs with fewer words are not compared
pub const DEFAULT_MIN_PARAGRAPH_WORDS: usize = 10;

/// Default bound on paragraph pair comparisons per call
pub const DEFAULT_MAX_COMPARISONS: usize = 250_000;

/// Top-level plagscan configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Reference corpus location and loading rules
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Which algorithms contribute to the overall score
    #[serde(default)]
    pub algorithms: AlgorithmsConfig,

    /// Relative weight of each algorithm
    #[serde(default)]
    pub weights: Weights,

    /// Windowed query generation
    #[serde(default)]
    pub ngram: NgramConfig,

    /// Whole-document analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Paragraph-level passage matching
    #[serde(default)]
    pub passages: PassageConfig,
}

/// Reference corpus configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory holding reference documents
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,

    /// File extensions to load (case-insensitive, without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into sub-directories
    #[serde(default)]
    pub recursive: bool,

    /// Create the directory with a sample document when it is missing
    #[serde(default = "default_true")]
    pub seed_placeholder: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            extensions: default_extensions(),
            recursive: false,
            seed_placeholder: true,
        }
    }
}

/// Algorithm toggles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmsConfig {
    #[serde(default = "default_true")]
    pub cosine: bool,

    #[serde(default = "default_true")]
    pub lexical: bool,

    #[serde(default = "default_true")]
    pub ngram: bool,

    /// Cosine formula used by the aggregator
    #[serde(default)]
    pub cosine_mode: CosineMode,
}

impl Default for AlgorithmsConfig {
    fn default() -> Self {
        Self {
            cosine: true,
            lexical: true,
            ngram: true,
            cosine_mode: CosineMode::default(),
        }
    }
}

impl AlgorithmsConfig {
    /// True when at least one algorithm is enabled
    pub fn any_enabled(&self) -> bool {
        self.cosine || self.lexical || self.ngram
    }
}

/// Per-algorithm weights for the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_cosine_weight")]
    pub cosine: f64,

    #[serde(default = "default_lexical_weight")]
    pub lexical: f64,

    #[serde(default = "default_ngram_weight")]
    pub ngram: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cosine: default_cosine_weight(),
            lexical: default_lexical_weight(),
            ngram: default_ngram_weight(),
        }
    }
}

impl Weights {
    /// All-zero weights
    pub const ZERO: Weights = Weights {
        cosine: 0.0,
        lexical: 0.0,
        ngram: 0.0,
    };

    pub fn total(&self) -> f64 {
        self.cosine + self.lexical + self.ngram
    }
}

/// Windowed query generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramConfig {
    /// Content words per window
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Maximum number of queries generated per text
    #[serde(default = "default_max_queries")]
    pub max_queries: usize,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_queries: DEFAULT_MAX_QUERIES,
        }
    }
}

/// Whole-document analysis settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// References whose cosine exceeds this are reported as similar passages
    #[serde(default = "default_passage_cutoff")]
    pub passage_cutoff: f64,

    /// Maximum reference preview length in characters
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            passage_cutoff: DEFAULT_PASSAGE_CUTOFF,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Paragraph-level passage matching settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassageConfig {
    /// Minimum paragraph pair similarity to report
    #[serde(default = "default_passage_threshold")]
    pub threshold: f64,

    /// Paragraphs with fewer words are skipped
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    /// Maximum paragraph pairs compared per call (0 = unbounded)
    #[serde(default = "default_max_comparisons")]
    pub max_comparisons: usize,
}

impl Default for PassageConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PASSAGE_THRESHOLD,
            min_words: DEFAULT_MIN_PARAGRAPH_WORDS,
            max_comparisons: DEFAULT_MAX_COMPARISONS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS_DIR)
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

fn default_cosine_weight() -> f64 {
    0.4
}

fn default_lexical_weight() -> f64 {
    0.4
}

fn default_ngram_weight() -> f64 {
    0.2
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_max_queries() -> usize {
    DEFAULT_MAX_QUERIES
}

fn default_passage_cutoff() -> f64 {
    DEFAULT_PASSAGE_CUTOFF
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_passage_threshold() -> f64 {
    DEFAULT_PASSAGE_THRESHOLD
}

fn default_min_words() -> usize {
    DEFAULT_MIN_PARAGRAPH_WORDS
}

fn default_max_comparisons() -> usize {
    DEFAULT_MAX_COMPARISONS
}
