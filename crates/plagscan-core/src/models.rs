//! Data model shared by the aggregator, passage matcher and callers
//!
//! Every result type serializes with `serde`; transport encoding is left
//! to the caller.

use std::fmt;

use serde::Serialize;

/// Title used when a candidate document is analyzed without one
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// Level boundaries for [`SimilarityLevel`], applied to the cosine score
const HIGH_LEVEL_CUTOFF: f64 = 0.7;
const MEDIUM_LEVEL_CUTOFF: f64 = 0.4;

/// A reference or candidate text with an optional identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: Option<String>,
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered snapshot of reference documents.
///
/// Order is preserved from the backing store so that indices reported in
/// results always point at the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Identifier for the document at `index`, falling back to its position
    pub fn identifier(&self, index: usize) -> String {
        self.documents
            .get(index)
            .and_then(Document::id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("document-{}", index))
    }

    /// Size statistics. An empty corpus reports zeros.
    pub fn info(&self) -> CorpusInfo {
        let corpus_size = self.documents.len();
        let total_characters: usize = self.documents.iter().map(Document::char_len).sum();
        let average_document_length = if corpus_size == 0 {
            0.0
        } else {
            total_characters as f64 / corpus_size as f64
        };

        CorpusInfo {
            corpus_size,
            total_characters,
            average_document_length,
            corpus_loaded: corpus_size > 0,
        }
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Corpus size statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusInfo {
    pub corpus_size: usize,
    pub total_characters: usize,
    pub average_document_length: f64,
    pub corpus_loaded: bool,
}

/// Similarity algorithms combined by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Cosine,
    Lexical,
    Ngram,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Cosine => write!(f, "cosine"),
            Algorithm::Lexical => write!(f, "lexical"),
            Algorithm::Ngram => write!(f, "ngram"),
        }
    }
}

/// Result of analyzing one candidate against a corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Highest cosine score over the corpus, `[0, 1]`
    pub cosine_similarity: f64,
    /// Highest lexical overlap over the corpus, `[0, 100]`
    pub lexical_overlap: f64,
    /// Windowed-query heuristic for the candidate alone, `[0, 100]`
    pub ngram_score: f64,
    /// Weighted combination, `[0, 1]`
    pub overall_score: f64,
    pub similar_passages: Vec<SimilarPassage>,
    pub details: AnalysisDetails,
}

/// Per-reference scores and the weights that produced the overall score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDetails {
    pub reference_scores: Vec<ReferenceScore>,
    pub weights: EffectiveWeights,
    pub algorithms_used: Vec<Algorithm>,
    pub corpus_size: usize,
}

/// Weights after disabled algorithms are dropped and the rest renormalized
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveWeights {
    pub cosine: f64,
    pub lexical: f64,
    pub ngram: f64,
}

/// Scores of the candidate against one reference document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceScore {
    pub reference_index: usize,
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cosine_similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_overlap: Option<f64>,
}

/// A reference document similar enough to the candidate to report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPassage {
    pub reference_index: usize,
    pub reference_id: String,
    pub cosine_similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_overlap: Option<f64>,
    /// Leading characters of the reference, `...` appended when cut
    pub reference_preview: String,
}

/// A candidate paragraph matched against a corpus paragraph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassageMatch {
    pub document_paragraph: String,
    pub corpus_paragraph: String,
    pub corpus_id: String,
    pub corpus_index: usize,
    pub similarity: f64,
}

/// Coarse label for a pairwise comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityLevel {
    High,
    Medium,
    Low,
}

impl SimilarityLevel {
    /// Label a cosine score: above 0.7 is high, above 0.4 medium
    pub fn from_cosine(cosine: f64) -> Self {
        if cosine > HIGH_LEVEL_CUTOFF {
            SimilarityLevel::High
        } else if cosine > MEDIUM_LEVEL_CUTOFF {
            SimilarityLevel::Medium
        } else {
            SimilarityLevel::Low
        }
    }
}

impl fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityLevel::High => write!(f, "High"),
            SimilarityLevel::Medium => write!(f, "Medium"),
            SimilarityLevel::Low => write!(f, "Low"),
        }
    }
}

/// Direct comparison of two texts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub cosine_similarity: f64,
    pub lexical_overlap: f64,
    /// Mean of cosine and lexical overlap / 100
    pub overall_similarity: f64,
    pub text_a_length: usize,
    pub text_b_length: usize,
    pub similarity_level: SimilarityLevel,
}
