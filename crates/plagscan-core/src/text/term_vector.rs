use std::collections::HashMap;

/// Mapping from lower-cased token to its occurrence count in one text.
///
/// Built fresh for every comparison and dropped afterwards; never holds
/// an empty-string key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, u32>,
}

impl TermVector {
    /// Count tokens, ignoring empty strings
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            let token = token.into();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        TermVector { counts }
    }

    /// Occurrence count of `term`, 0 when absent
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Sum of squared counts
    pub fn squared_norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&count| f64::from(count) * f64::from(count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_skips_empty() {
        let vector = TermVector::from_tokens(["a", "", "b", "a"]);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.get("a"), 2);
        assert!(!vector.contains(""));
    }

    #[test]
    fn test_squared_norm() {
        let vector = TermVector::from_tokens(["x", "x", "y"]);
        assert_eq!(vector.squared_norm(), 5.0);
        assert_eq!(TermVector::default().squared_norm(), 0.0);
    }
}
