//! Plagscan Core Library
//!
//! Lexical similarity engine: scores a candidate document against a corpus
//! of reference documents with three independent algorithms, combines them
//! into one weighted score, and attributes matching paragraphs.

pub mod aggregate;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod passages;
pub mod similarity;
pub mod text;

pub use aggregate::SimilarityAggregator;
pub use config::ScanConfig;
pub use corpus::{CorpusStore, DirectoryCorpus};
pub use error::{Result, ScanError};
pub use models::{Corpus, Document};
pub use passages::PassageMatcher;
