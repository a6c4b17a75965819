//! Lexical similarity algorithms
//!
//! Three independent scores feed the aggregator:
//!
//! | Algorithm | Range | Function |
//! |-----------|-------|----------|
//! | Matched-count cosine | `[0, 1]` | [`cosine_text`] |
//! | Lexical overlap | `[0, 100]` | [`lexical_overlap`] |
//! | Windowed-query heuristic | `[0, 100]` | [`WindowedQueryGenerator::score`] |
//!
//! Passage matching uses a fourth score, [`pair_similarity`], a TF-IDF
//! cosine computed over just the two paragraphs being compared.
//!
//! Every function builds its vectors per call and drops them on return.

pub mod cosine;
pub mod lexical;
pub mod tfidf;
pub mod windowed;

pub use cosine::{cosine_similarity, cosine_text, symmetric_cosine, CosineMode};
pub use lexical::lexical_overlap;
pub use tfidf::{pair_similarity, pair_similarity_from_frequencies, term_frequencies};
pub use windowed::{heuristic_score, WindowedQueryGenerator};
