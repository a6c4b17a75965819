//! Sentence-aware sliding-window chunking and the originality heuristic
//!
//! Each sentence is reduced to its content words, then cut into windows
//! of `window_size` words that overlap by one word. Windows are joined
//! into query strings. With no external search backend the queries are
//! only counted: the count drives a heuristic score in `[0, 100]` where
//! fewer, denser chunks score higher. The score is a proxy, not a
//! verified originality measure.

use crate::text::{content_terms, sentences};

/// Default number of content words per window
pub const DEFAULT_WINDOW_SIZE: usize = 9;

/// Default cap on the number of generated queries
pub const DEFAULT_MAX_QUERIES: usize = 100;

/// Sentences at or below this many content words (and no longer than a
/// window) produce no query
const MIN_SENTENCE_TERMS: usize = 4;

/// Query count at which the heuristic bottoms out
const HEURISTIC_QUERY_CAP: usize = 100;

/// Generates windowed queries from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedQueryGenerator {
    window_size: usize,
    max_queries: usize,
}

impl Default for WindowedQueryGenerator {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_queries: DEFAULT_MAX_QUERIES,
        }
    }
}

impl WindowedQueryGenerator {
    /// Create a generator. `window_size` is raised to at least 2 so
    /// consecutive windows always advance; `max_queries` to at least 1.
    pub fn new(window_size: usize, max_queries: usize) -> Self {
        Self {
            window_size: window_size.max(2),
            max_queries: max_queries.max(1),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn max_queries(&self) -> usize {
        self.max_queries
    }

    /// Cut one sentence's content words into windows.
    ///
    /// A sentence longer than the window yields `len / window_size`
    /// windows, each starting one word before the previous one ended
    /// (clamped so no window runs past the sentence), followed by any
    /// words left after the last window. A sentence that fits in one
    /// window is emitted whole only when it has more than four words.
    pub fn windows<'a>(&self, terms: &[&'a str]) -> Vec<Vec<&'a str>> {
        let len = terms.len();
        let n = self.window_size;
        let mut windows = Vec::new();

        if len > n {
            let groups = len / n;
            let mut index = 0;
            let mut consumed = 0;
            for _ in 0..groups {
                let start = index.min(len - n);
                windows.push(terms[start..start + n].to_vec());
                consumed = start + n;
                index = start + n - 1;
            }
            if consumed < len {
                windows.push(terms[consumed..].to_vec());
            }
        } else if len > MIN_SENTENCE_TERMS {
            windows.push(terms.to_vec());
        }

        windows
    }

    /// Generate at most `max_queries` space-joined window queries
    pub fn queries(&self, text: &str) -> Vec<String> {
        let mut queries = Vec::new();

        for sentence in sentences(text) {
            let terms = content_terms(sentence);
            for window in self.windows(&terms) {
                let query = window.join(" ");
                if query.is_empty() {
                    continue;
                }
                queries.push(query);
                if queries.len() >= self.max_queries {
                    return queries;
                }
            }
        }

        queries
    }

    /// Originality heuristic for `text` in `[0, 100]`
    pub fn score(&self, text: &str) -> f64 {
        heuristic_score(self.queries(text).len())
    }
}

/// Heuristic score for a query count.
///
/// `100 - 0.5 * min(count, 100)`, clamped to `[0, 100]`. Text that yields
/// no query at all carries no evidence and scores 0.
pub fn heuristic_score(query_count: usize) -> f64 {
    if query_count == 0 {
        return 0.0;
    }
    let capped = query_count.min(HEURISTIC_QUERY_CAP) as f64;
    (100.0 - 0.5 * capped).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("w{}", i)).collect()
    }

    fn refs(words: &[String]) -> Vec<&str> {
        words.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_short_sentence_dropped() {
        let generator = WindowedQueryGenerator::default();
        let w = words(4);
        assert!(generator.windows(&refs(&w)).is_empty());
    }

    #[test]
    fn test_medium_sentence_single_window() {
        let generator = WindowedQueryGenerator::default();
        for count in 5..=9 {
            let w = words(count);
            let windows = generator.windows(&refs(&w));
            assert_eq!(windows.len(), 1, "count {}", count);
            assert_eq!(windows[0].len(), count);
        }
    }

    #[test]
    fn test_long_sentence_overlapping_windows_and_remainder() {
        let generator = WindowedQueryGenerator::default();
        let w = words(20);
        let windows = generator.windows(&refs(&w));

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0], refs(&w)[0..9].to_vec());
        // one-word overlap with the previous window
        assert_eq!(windows[1], refs(&w)[8..17].to_vec());
        assert_eq!(windows[2], refs(&w)[17..20].to_vec());
    }

    #[test]
    fn test_small_window_remainder() {
        let generator = WindowedQueryGenerator::new(4, 100);
        // groups = 2: [0..4], [3..7]; then the leftover [7..10]
        let w = words(10);
        let windows = generator.windows(&refs(&w));
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[1], refs(&w)[3..7].to_vec());
        assert_eq!(windows[2], refs(&w)[7..10].to_vec());
    }

    #[test]
    fn test_windows_cover_sentence_without_overrun() {
        for n in 2..12 {
            let generator = WindowedQueryGenerator::new(n, 100);
            for len in (n + 1)..60 {
                let w = words(len);
                let windows = generator.windows(&refs(&w));
                assert_eq!(windows.len(), len / n + 1, "n {} len {}", n, len);
                for window in &windows[..len / n] {
                    assert_eq!(window.len(), n);
                }
                let last = windows.last().unwrap();
                assert_eq!(*last.last().unwrap(), w[len - 1].as_str());
            }
        }
    }

    #[test]
    fn test_queries_filter_stop_words_and_join() {
        let generator = WindowedQueryGenerator::default();
        let queries = generator.queries("The quick brown fox jumps over the lazy dog.");
        assert_eq!(queries, vec!["quick brown fox jumps lazy dog"]);
    }

    #[test]
    fn test_queries_capped() {
        let generator = WindowedQueryGenerator::default();
        let sentence = "alpha beta gamma delta epsilon zeta eta theta. ";
        let text = sentence.repeat(500);
        let queries = generator.queries(&text);
        assert_eq!(queries.len(), DEFAULT_MAX_QUERIES);
    }

    #[test]
    fn test_heuristic_values() {
        assert_eq!(heuristic_score(0), 0.0);
        assert_eq!(heuristic_score(1), 99.5);
        assert_eq!(heuristic_score(10), 95.0);
        assert_eq!(heuristic_score(100), 50.0);
        assert_eq!(heuristic_score(10_000), 50.0);
    }

    #[test]
    fn test_heuristic_non_increasing() {
        let mut previous = heuristic_score(1);
        for count in 2..300 {
            let current = heuristic_score(count);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let generator = WindowedQueryGenerator::default();
        assert!(generator.queries("").is_empty());
        assert_eq!(generator.score(""), 0.0);
    }

    #[test]
    fn test_new_enforces_minimums() {
        let generator = WindowedQueryGenerator::new(0, 0);
        assert_eq!(generator.window_size(), 2);
        assert_eq!(generator.max_queries(), 1);
    }
}
