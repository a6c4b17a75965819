use std::collections::HashSet;

use crate::text::{is_stopword, word_tokens, TermVector};

/// Shared-vocabulary overlap between two texts, as a percentage.
///
/// The vocabulary is the union of distinct tokens of both texts, in
/// first-seen order, minus stop words. Each text becomes a frequency
/// array over that vocabulary and the result is the cosine of the two
/// arrays scaled to `[0, 100]`. Symmetric by construction; 0.0 when
/// either array has zero magnitude.
pub fn lexical_overlap(text1: &str, text2: &str) -> f64 {
    let tokens1 = word_tokens(text1);
    let tokens2 = word_tokens(text2);

    let vocabulary = shared_vocabulary(&tokens1, &tokens2);
    if vocabulary.is_empty() {
        return 0.0;
    }

    let counts1 = TermVector::from_tokens(tokens1.iter().map(String::as_str));
    let counts2 = TermVector::from_tokens(tokens2.iter().map(String::as_str));

    let mut dot = 0.0;
    let mut norm1 = 0.0;
    let mut norm2 = 0.0;
    for term in &vocabulary {
        let f1 = f64::from(counts1.get(term));
        let f2 = f64::from(counts2.get(term));
        dot += f1 * f2;
        norm1 += f1 * f1;
        norm2 += f2 * f2;
    }

    let magnitude = (norm1 * norm2).sqrt();
    if magnitude == 0.0 {
        return 0.0;
    }

    (dot / magnitude * 100.0).clamp(0.0, 100.0)
}

/// Distinct non-stop-word tokens of both lists, first-seen order
fn shared_vocabulary<'a>(tokens1: &'a [String], tokens2: &'a [String]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    tokens1
        .iter()
        .chain(tokens2.iter())
        .map(String::as_str)
        .filter(|token| !is_stopword(token))
        .filter(|token| seen.insert(*token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_is_hundred() {
        let text = "Plagiarism detection compares documents word by word.";
        assert_eq!(lexical_overlap(text, text), 100.0);
    }

    #[test]
    fn test_only_stop_words_is_zero() {
        assert_eq!(lexical_overlap("the and of", "the and of"), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(lexical_overlap("", "something here"), 0.0);
        assert_eq!(lexical_overlap("", ""), 0.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        assert_eq!(lexical_overlap("apples pears", "rivers stones"), 0.0);
    }

    #[test]
    fn test_hand_computed_value() {
        // vocabulary [cat, sat, mat, dog]; a = [1,1,1,0], b = [1,0,0,1]
        let a = "The cat sat on the mat";
        let b = "A cat and a dog";
        let expected = 1.0 / (3.0_f64.sqrt() * 2.0_f64.sqrt()) * 100.0;
        assert!((lexical_overlap(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = "Rust ownership rules keep memory safe and fast";
        let b = "Memory safety in Rust comes from ownership and borrowing";
        assert_eq!(lexical_overlap(a, b), lexical_overlap(b, a));
    }

    #[test]
    fn test_vocabulary_order_and_filtering() {
        let a: Vec<String> = vec!["the".into(), "fox".into(), "ran".into()];
        let b: Vec<String> = vec!["fox".into(), "and".into(), "hid".into()];
        assert_eq!(shared_vocabulary(&a, &b), vec!["fox", "ran", "hid"]);
    }
}
