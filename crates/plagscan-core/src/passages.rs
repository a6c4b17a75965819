//! Paragraph-level passage matching
//!
//! The candidate and every reference are split into paragraphs on blank
//! lines; paragraphs shorter than `min_words` are dropped. Each remaining
//! candidate paragraph is scored against each remaining reference
//! paragraph with [`pair_similarity`](crate::similarity::pair_similarity),
//! a TF-IDF cosine over just that pair.
//!
//! The work is quadratic in paragraph count. Pairs are enumerated over a
//! precomputed paragraph index, truncated to `max_comparisons`, and
//! scored in parallel.

use std::collections::HashMap;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::PassageConfig;
use crate::models::{Corpus, PassageMatch};
use crate::similarity::{pair_similarity_from_frequencies, term_frequencies};
use crate::text::{paragraphs, word_count};
use crate::trace_time;

/// A paragraph kept for comparison, with its term counts
struct IndexedParagraph<'a> {
    text: &'a str,
    terms: HashMap<String, f64>,
}

impl<'a> IndexedParagraph<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            terms: term_frequencies(text),
        }
    }
}

/// A reference paragraph and the corpus document it came from
struct ReferenceParagraph<'a> {
    document: usize,
    paragraph: IndexedParagraph<'a>,
}

/// Finds candidate paragraphs that closely match reference paragraphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassageMatcher {
    threshold: f64,
    min_words: usize,
    max_comparisons: usize,
}

impl Default for PassageMatcher {
    fn default() -> Self {
        Self::from_config(&PassageConfig::default())
    }
}

impl PassageMatcher {
    pub fn from_config(config: &PassageConfig) -> Self {
        Self {
            threshold: config.threshold.clamp(0.0, 1.0),
            min_words: config.min_words.max(1),
            max_comparisons: config.max_comparisons,
        }
    }

    /// Override the reporting threshold, clamped to `[0, 1]`
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn eligible<'a>(&self, text: &'a str) -> Vec<&'a str> {
        paragraphs(text)
            .into_iter()
            .filter(|p| word_count(p) >= self.min_words)
            .collect()
    }

    /// Match the candidate's paragraphs against every corpus paragraph.
    ///
    /// Returns pairs scoring at or above the threshold, most similar
    /// first. Equal scores keep candidate paragraph order, then corpus
    /// order.
    pub fn find(&self, text: &str, corpus: &Corpus) -> Vec<PassageMatch> {
        let start = Instant::now();

        let candidates: Vec<IndexedParagraph> = self
            .eligible(text)
            .into_iter()
            .map(IndexedParagraph::new)
            .collect();

        let references: Vec<ReferenceParagraph> = corpus
            .iter()
            .enumerate()
            .flat_map(|(document, doc)| {
                self.eligible(doc.text())
                    .into_iter()
                    .map(move |p| ReferenceParagraph {
                        document,
                        paragraph: IndexedParagraph::new(p),
                    })
            })
            .collect();

        let total = candidates.len() * references.len();
        if total == 0 {
            debug!(
                candidate_paragraphs = candidates.len(),
                reference_paragraphs = references.len(),
                "No paragraph pairs to compare"
            );
            return Vec::new();
        }

        let limit = if self.max_comparisons == 0 {
            total
        } else {
            total.min(self.max_comparisons)
        };
        if limit < total {
            warn!(
                total,
                compared = limit,
                "Paragraph comparison bound reached, remaining pairs skipped"
            );
        }
        debug!(
            candidate_paragraphs = candidates.len(),
            reference_paragraphs = references.len(),
            comparisons = limit,
            "passage_matching"
        );

        let per_candidate = references.len();
        let mut matches: Vec<PassageMatch> = (0..limit)
            .into_par_iter()
            .filter_map(|pair| {
                let candidate = &candidates[pair / per_candidate];
                let reference = &references[pair % per_candidate];
                let similarity =
                    pair_similarity_from_frequencies(&candidate.terms, &reference.paragraph.terms);

                (similarity >= self.threshold).then(|| PassageMatch {
                    document_paragraph: candidate.text.to_string(),
                    corpus_paragraph: reference.paragraph.text.to_string(),
                    corpus_id: corpus.identifier(reference.document),
                    corpus_index: reference.document,
                    similarity,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        trace_time!(start, "find_passages", matches = matches.len());
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    const SHARED: &str = "Rust ownership rules guarantee memory safety without a garbage \
                          collector by tracking lifetimes at compile time.";
    const OTHER: &str = "Volcanic islands form when magma rises through oceanic crust \
                         and cools into new land over many thousands of years.";
    const SHORT: &str = "Too short to count.";

    #[test]
    fn test_identical_paragraph_is_found() {
        let text = format!("{}\n\n{}", SHORT, SHARED);
        let corpus = Corpus::new(vec![
            Document::with_id("geology.txt", OTHER),
            Document::with_id("rust.txt", format!("{}\n\n{}", OTHER, SHARED)),
        ]);

        let matches = PassageMatcher::default().find(&text, &corpus);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].document_paragraph, SHARED);
        assert_eq!(matches[0].corpus_paragraph, SHARED);
        assert_eq!(matches[0].corpus_id, "rust.txt");
        assert_eq!(matches[0].corpus_index, 1);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_paragraphs_are_ignored() {
        let corpus = Corpus::new(vec![Document::new(SHORT)]);
        let matches = PassageMatcher::default()
            .with_threshold(0.0)
            .find(SHORT, &corpus);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let matcher = PassageMatcher::default();
        assert!(matcher.find("", &Corpus::new(vec![Document::new(SHARED)])).is_empty());
        assert!(matcher.find(SHARED, &Corpus::default()).is_empty());
    }

    #[test]
    fn test_sorted_by_similarity_descending() {
        let text = format!("{}\n\n{}", OTHER, SHARED);
        let corpus = Corpus::new(vec![Document::new(format!("{}\n\n{}", SHARED, OTHER))]);

        let matches = PassageMatcher::default()
            .with_threshold(0.0)
            .find(&text, &corpus);
        assert_eq!(matches.len(), 4);
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        assert!(matches[..2]
            .iter()
            .all(|m| m.document_paragraph == m.corpus_paragraph));
        assert!(matches[2..].iter().all(|m| m.similarity == 0.0));
    }

    #[test]
    fn test_ties_keep_candidate_then_corpus_order() {
        // single-term paragraphs score exactly 1.0 against themselves
        let echo = "the echo of the echo and the echo in the echo";
        let chime = "the chime of the chime and the chime in the chime";
        let text = format!("{}\n\n{}", echo, chime);
        let corpus = Corpus::new(vec![
            Document::with_id("first.txt", format!("{}\n\n{}", chime, echo)),
            Document::with_id("second.txt", echo),
        ]);

        let matches = PassageMatcher::default()
            .with_threshold(0.5)
            .find(&text, &corpus);
        assert!(matches.iter().all(|m| m.similarity == matches[0].similarity));

        let order: Vec<(&str, usize)> = matches
            .iter()
            .map(|m| (m.document_paragraph.as_str(), m.corpus_index))
            .collect();
        assert_eq!(order, vec![(echo, 0), (echo, 1), (chime, 0)]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let corpus = Corpus::new(vec![Document::new(SHARED)]);
        let matches = PassageMatcher::default()
            .with_threshold(0.0)
            .find(OTHER, &corpus);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].similarity, 0.0);
    }

    #[test]
    fn test_comparison_bound_truncates() {
        let text = format!("{}\n\n{}", SHARED, OTHER);
        let corpus = Corpus::new(vec![Document::new(format!("{}\n\n{}", SHARED, OTHER))]);

        let bounded = PassageMatcher::from_config(&PassageConfig {
            threshold: 0.0,
            min_words: 10,
            max_comparisons: 2,
        });
        let matches = bounded.find(&text, &corpus);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.document_paragraph == SHARED));

        let unbounded = PassageMatcher::from_config(&PassageConfig {
            threshold: 0.0,
            min_words: 10,
            max_comparisons: 0,
        });
        assert_eq!(unbounded.find(&text, &corpus).len(), 4);
    }
}
