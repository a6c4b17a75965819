use serde::{Deserialize, Serialize};

use crate::text::{tokenize, TermVector};

/// Which cosine formula the aggregator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CosineMode {
    /// Matched-count cosine weighted towards the first vector (default)
    #[default]
    Asymmetric,
    /// Textbook cosine over raw term counts
    Symmetric,
}

/// Matched-count cosine between two term vectors.
///
/// For every shared term `w`, `matched[w] = min(vec1[w], vec2[w])`. The
/// score is `Σ vec1[w]·matched[w] / (‖vec1‖ · ‖matched‖)`. Only `vec1`
/// and the matched counts enter the formula, so `cosine_similarity(a, b)`
/// and `cosine_similarity(b, a)` can differ. Returns 0.0 when either
/// norm is zero.
pub fn cosine_similarity(vec1: &TermVector, vec2: &TermVector) -> f64 {
    let mut numerator = 0.0;
    let mut matched_norm = 0.0;

    for (term, count1) in vec1.iter() {
        let count2 = vec2.get(term);
        if count2 == 0 {
            continue;
        }
        let matched = f64::from(count1.min(count2));
        numerator += f64::from(count1) * matched;
        matched_norm += matched * matched;
    }

    // sqrt of the product keeps identical vectors at exactly 1.0
    let denominator = (vec1.squared_norm() * matched_norm).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (numerator / denominator).clamp(0.0, 1.0)
}

/// Symmetric cosine over raw term counts
pub fn symmetric_cosine(vec1: &TermVector, vec2: &TermVector) -> f64 {
    let (small, large) = if vec1.len() <= vec2.len() {
        (vec1, vec2)
    } else {
        (vec2, vec1)
    };

    let dot: f64 = small
        .iter()
        .map(|(term, count)| f64::from(count) * f64::from(large.get(term)))
        .sum();

    let denominator = (vec1.squared_norm() * vec2.squared_norm()).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}

/// Cosine similarity between two texts, each tokenized independently
pub fn cosine_text(text1: &str, text2: &str, mode: CosineMode) -> f64 {
    let vec1 = tokenize(text1);
    let vec2 = tokenize(text2);

    match mode {
        CosineMode::Asymmetric => cosine_similarity(&vec1, &vec2),
        CosineMode::Symmetric => symmetric_cosine(&vec1, &vec2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(tokens: &[&str]) -> TermVector {
        TermVector::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vector(&["a", "a", "b", "c", "c", "c"]);
        assert_eq!(cosine_similarity(&v, &v), 1.0);
        assert_eq!(symmetric_cosine(&v, &v), 1.0);
    }

    #[test]
    fn test_hand_computed_value() {
        // I = {x}, matched = {x: 1}; numerator 2, denominator sqrt(5) * 1
        let v1 = vector(&["x", "x", "z"]);
        let v2 = vector(&["x", "y"]);
        let expected = 2.0 / 5.0_f64.sqrt();
        assert!((cosine_similarity(&v1, &v2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_asymmetric_formula() {
        let v1 = vector(&["x", "y"]);
        let v2 = vector(&["x", "x", "z"]);
        let forward = cosine_similarity(&v1, &v2);
        let backward = cosine_similarity(&v2, &v1);
        assert!((forward - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((backward - 2.0 / 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((forward - backward).abs() > 0.1);
    }

    #[test]
    fn test_symmetric_mode_is_symmetric() {
        let v1 = vector(&["x", "y"]);
        let v2 = vector(&["x", "x", "z"]);
        let expected = 2.0 / (2.0_f64.sqrt() * 5.0_f64.sqrt());
        assert!((symmetric_cosine(&v1, &v2) - expected).abs() < 1e-12);
        assert_eq!(symmetric_cosine(&v1, &v2), symmetric_cosine(&v2, &v1));
    }

    #[test]
    fn test_zero_magnitude_is_zero() {
        let empty = TermVector::default();
        let v = vector(&["a"]);
        assert_eq!(cosine_similarity(&empty, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
        assert_eq!(symmetric_cosine(&empty, &v), 0.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let v1 = vector(&["apple", "pear"]);
        let v2 = vector(&["stone", "river"]);
        assert_eq!(cosine_similarity(&v1, &v2), 0.0);
        assert_eq!(symmetric_cosine(&v1, &v2), 0.0);
    }

    #[test]
    fn test_cosine_text_case_folds() {
        let score = cosine_text("Rust Systems", "rust systems", CosineMode::Asymmetric);
        assert_eq!(score, 1.0);
    }
}
