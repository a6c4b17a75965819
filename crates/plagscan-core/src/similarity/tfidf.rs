use std::collections::HashMap;

use crate::text::{is_passage_stopword, word_tokens};

/// Terms shorter than this are ignored when vectorizing a pair
const MIN_TERM_CHARS: usize = 2;

/// Number of documents in a pair
const PAIR_DOCS: f64 = 2.0;

pub fn cosine_similarity(vec_a: &HashMap<String, f64>, vec_b: &HashMap<String, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Raw counts of the terms that take part in pair TF-IDF
pub fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut freqs = HashMap::new();
    for token in word_tokens(text) {
        if token.chars().count() < MIN_TERM_CHARS || is_passage_stopword(&token) {
            continue;
        }
        *freqs.entry(token).or_insert(0.0) += 1.0;
    }
    freqs
}

fn weight_vector(
    term_freqs: &HashMap<String, f64>,
    doc_freqs: &HashMap<&str, f64>,
) -> HashMap<String, f64> {
    let mut vector = HashMap::new();

    for (term, &tf) in term_freqs {
        let df = doc_freqs.get(term.as_str()).copied().unwrap_or(1.0);
        let idf = ((PAIR_DOCS + 1.0) / (df + 1.0)).ln() + 1.0;
        vector.insert(term.clone(), tf * idf);
    }

    vector
}

/// TF-IDF cosine between two texts, vectorized as a two-document corpus.
///
/// Terms are lower-cased word runs of at least two characters with stop
/// words removed. Document frequencies come from the pair alone, with a
/// smoothed `idf = ln((1 + n) / (1 + df)) + 1`. Returns a score in
/// `[0, 1]`, or 0.0 when either text has no usable term.
pub fn pair_similarity(text_a: &str, text_b: &str) -> f64 {
    pair_similarity_from_frequencies(&term_frequencies(text_a), &term_frequencies(text_b))
}

/// [`pair_similarity`] over term counts already extracted with
/// [`term_frequencies`]
pub fn pair_similarity_from_frequencies(
    tf_a: &HashMap<String, f64>,
    tf_b: &HashMap<String, f64>,
) -> f64 {
    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    let mut doc_freqs: HashMap<&str, f64> = HashMap::new();
    for term in tf_a.keys().chain(tf_b.keys()) {
        *doc_freqs.entry(term.as_str()).or_insert(0.0) += 1.0;
    }

    let vec_a = weight_vector(tf_a, &doc_freqs);
    let vec_b = weight_vector(tf_b, &doc_freqs);

    cosine_similarity(&vec_a, &vec_b)
}
