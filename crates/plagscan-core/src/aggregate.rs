//! Combines the similarity algorithms into one result
//!
//! The aggregator owns its configuration and a [`CorpusStore`]; both are
//! supplied at construction. Each corpus-backed call reloads the corpus
//! from the store.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{AlgorithmsConfig, ScanConfig, Weights};
use crate::corpus::CorpusStore;
use crate::error::Result;
use crate::models::{
    Algorithm, AnalysisDetails, Comparison, Corpus, CorpusInfo, EffectiveWeights, PassageMatch,
    ReferenceScore, SimilarPassage, SimilarityLevel, SimilarityResult,
};
use crate::passages::PassageMatcher;
use crate::similarity::{cosine_text, lexical_overlap, WindowedQueryGenerator};
use crate::text::preview;
use crate::trace_time;

/// Drop the weights of disabled algorithms and rescale the rest to sum to 1.
///
/// Enabled algorithms whose weights are all zero share the total equally.
/// With every algorithm disabled all weights are zero.
pub fn effective_weights(algorithms: &AlgorithmsConfig, weights: &Weights) -> EffectiveWeights {
    let pick = |enabled: bool, weight: f64| if enabled { weight } else { 0.0 };
    let mut kept = Weights {
        cosine: pick(algorithms.cosine, weights.cosine),
        lexical: pick(algorithms.lexical, weights.lexical),
        ngram: pick(algorithms.ngram, weights.ngram),
    };

    if kept.total() <= 0.0 {
        kept = Weights {
            cosine: pick(algorithms.cosine, 1.0),
            lexical: pick(algorithms.lexical, 1.0),
            ngram: pick(algorithms.ngram, 1.0),
        };
    }

    let total = kept.total();
    if total <= 0.0 {
        kept = Weights::ZERO;
    } else {
        kept.cosine /= total;
        kept.lexical /= total;
        kept.ngram /= total;
    }

    EffectiveWeights {
        cosine: kept.cosine,
        lexical: kept.lexical,
        ngram: kept.ngram,
    }
}

/// Runs the enabled algorithms for one candidate against a corpus
pub struct SimilarityAggregator<S: CorpusStore = Corpus> {
    config: ScanConfig,
    store: S,
    queries: WindowedQueryGenerator,
}

impl<S: CorpusStore> SimilarityAggregator<S> {
    pub fn new(config: ScanConfig, store: S) -> Self {
        let queries = config.query_generator();
        Self {
            config,
            store,
            queries,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn algorithms_used(&self) -> Vec<Algorithm> {
        let algorithms = &self.config.algorithms;
        [
            (algorithms.cosine, Algorithm::Cosine),
            (algorithms.lexical, Algorithm::Lexical),
            (algorithms.ngram, Algorithm::Ngram),
        ]
        .into_iter()
        .filter_map(|(enabled, algorithm)| enabled.then_some(algorithm))
        .collect()
    }

    /// Load the corpus from the store and analyze `text` against it
    pub fn analyze(&self, text: &str) -> Result<SimilarityResult> {
        let corpus = self.store.load()?;
        Ok(self.analyze_corpus(text, &corpus))
    }

    /// Analyze `text` against an already loaded corpus.
    ///
    /// Cosine and lexical scores are the maxima over all references; the
    /// windowed-query heuristic depends on `text` alone. References whose
    /// cosine exceeds `analysis.passage_cutoff` are reported as similar
    /// passages. With an empty corpus only the heuristic contributes.
    pub fn analyze_corpus(&self, text: &str, corpus: &Corpus) -> SimilarityResult {
        let start = Instant::now();
        let algorithms = self.config.algorithms;
        let weights = effective_weights(&algorithms, &self.config.weights);

        if !algorithms.any_enabled() {
            warn!("All similarity algorithms are disabled, overall score is 0");
        }

        let ngram_score = if algorithms.ngram {
            self.queries.score(text)
        } else {
            0.0
        };

        let details = |reference_scores: Vec<ReferenceScore>| AnalysisDetails {
            reference_scores,
            weights,
            algorithms_used: self.algorithms_used(),
            corpus_size: corpus.len(),
        };

        if corpus.is_empty() {
            debug!(ngram_score, "Empty corpus, scoring heuristic only");
            let overall_score = if algorithms.ngram {
                (ngram_score / 100.0).clamp(0.0, 1.0)
            } else {
                0.0
            };
            return SimilarityResult {
                cosine_similarity: 0.0,
                lexical_overlap: 0.0,
                ngram_score,
                overall_score,
                similar_passages: Vec::new(),
                details: details(Vec::new()),
            };
        }

        let mode = self.config.algorithms.cosine_mode;
        let reference_scores: Vec<ReferenceScore> = corpus
            .documents()
            .par_iter()
            .enumerate()
            .map(|(index, doc)| ReferenceScore {
                reference_index: index,
                reference_id: corpus.identifier(index),
                cosine_similarity: algorithms
                    .cosine
                    .then(|| cosine_text(text, doc.text(), mode)),
                lexical_overlap: algorithms
                    .lexical
                    .then(|| lexical_overlap(text, doc.text())),
            })
            .collect();

        let mut cosine_similarity: f64 = 0.0;
        let mut best_lexical: f64 = 0.0;
        let mut similar_passages = Vec::new();

        for score in &reference_scores {
            debug!(
                reference = %score.reference_id,
                cosine = ?score.cosine_similarity,
                lexical = ?score.lexical_overlap,
                "reference_scored"
            );

            let cosine = score.cosine_similarity.unwrap_or(0.0);
            cosine_similarity = cosine_similarity.max(cosine);
            best_lexical = best_lexical.max(score.lexical_overlap.unwrap_or(0.0));

            if score.cosine_similarity.is_some() && cosine > self.config.analysis.passage_cutoff {
                let reference_text = corpus
                    .get(score.reference_index)
                    .map(|doc| doc.text())
                    .unwrap_or_default();
                similar_passages.push(SimilarPassage {
                    reference_index: score.reference_index,
                    reference_id: score.reference_id.clone(),
                    cosine_similarity: cosine,
                    lexical_overlap: score.lexical_overlap,
                    reference_preview: preview(
                        reference_text,
                        self.config.analysis.preview_chars,
                    ),
                });
            }
        }

        let overall_score = (weights.cosine * cosine_similarity
            + weights.lexical * (best_lexical / 100.0)
            + weights.ngram * (ngram_score / 100.0))
            .clamp(0.0, 1.0);

        trace_time!(start, "analyze", references = corpus.len());

        SimilarityResult {
            cosine_similarity,
            lexical_overlap: best_lexical,
            ngram_score,
            overall_score,
            similar_passages,
            details: details(reference_scores),
        }
    }

    /// Compare two texts directly, without the corpus or the heuristic
    pub fn compare(&self, text_a: &str, text_b: &str) -> Comparison {
        let cosine_similarity = cosine_text(text_a, text_b, self.config.algorithms.cosine_mode);
        let lexical = lexical_overlap(text_a, text_b);

        Comparison {
            cosine_similarity,
            lexical_overlap: lexical,
            overall_similarity: ((cosine_similarity + lexical / 100.0) / 2.0).clamp(0.0, 1.0),
            text_a_length: text_a.chars().count(),
            text_b_length: text_b.chars().count(),
            similarity_level: SimilarityLevel::from_cosine(cosine_similarity),
        }
    }

    /// Size statistics of the corpus as currently stored
    pub fn corpus_info(&self) -> Result<CorpusInfo> {
        Ok(self.store.load()?.info())
    }

    /// Passage matcher configured from `[passages]`
    pub fn passage_matcher(&self) -> PassageMatcher {
        PassageMatcher::from_config(&self.config.passages)
    }

    /// Load the corpus and find matching paragraphs.
    ///
    /// `threshold` overrides the configured passage threshold.
    pub fn find_passages(&self, text: &str, threshold: Option<f64>) -> Result<Vec<PassageMatch>> {
        let corpus = self.store.load()?;
        Ok(self.find_passages_in(text, &corpus, threshold))
    }

    /// Find matching paragraphs in an already loaded corpus
    pub fn find_passages_in(
        &self,
        text: &str,
        corpus: &Corpus,
        threshold: Option<f64>,
    ) -> Vec<PassageMatch> {
        let mut matcher = self.passage_matcher();
        if let Some(threshold) = threshold {
            matcher = matcher.with_threshold(threshold);
        }
        matcher.find(text, corpus)
    }
}
