//! Text processing utilities: tokenization, stop words and segmentation

mod term_vector;

pub use term_vector::TermVector;

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::warn;

/// English stop words, shared read-only across all comparisons
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Maximal runs of word characters (letters, digits, underscore)
static WORD_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// A line break, optional horizontal whitespace, and another line break
static BLANK_LINE_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Characters that terminate a sentence for windowed query generation
const SENTENCE_ENDERS: [char; 4] = ['.', '!', '?', '\''];

pub fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
            "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
            "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
            "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
            "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was",
            "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
            "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
            "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
            "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
            "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
            "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "don't",
            "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
            "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
            "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
            "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
            "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
            "wouldn't",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Check a lower-cased token against the stop word list
pub fn is_stopword(token: &str) -> bool {
    stop_words().contains(token)
}

/// Stop words dropped when vectorizing paragraphs for pair TF-IDF.
///
/// This is the scikit-learn `ENGLISH_STOP_WORDS` list, which differs from
/// [`stop_words`]: it has no contractions and adds numerals and filler words.
static PASSAGE_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub fn passage_stop_words() -> &'static HashSet<&'static str> {
    PASSAGE_STOP_WORDS.get_or_init(|| {
        [
            "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
            "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
            "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
            "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be",
            "became", "because", "become", "becomes", "becoming", "been", "before",
            "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
            "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
            "could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due",
            "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty",
            "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
            "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for",
            "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
            "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
            "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself",
            "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
            "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
            "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile",
            "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much",
            "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless",
            "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
            "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
            "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
            "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
            "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
            "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
            "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten",
            "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
            "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
            "thick", "thin", "third", "this", "those", "though", "three", "through",
            "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards",
            "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us", "very", "via",
            "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
            "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
            "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose",
            "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
            "yourself", "yourselves",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Check a lower-cased token against the passage stop word list
pub fn is_passage_stopword(token: &str) -> bool {
    passage_stop_words().contains(token)
}

fn word_regex() -> Option<&'static Regex> {
    WORD_RE
        .get_or_init(|| match Regex::new(r"\w+") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile word regex");
                None
            }
        })
        .as_ref()
}

fn blank_line_regex() -> Option<&'static Regex> {
    BLANK_LINE_RE
        .get_or_init(|| match Regex::new(r"\n[ \t\r]*\n") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile paragraph regex");
                None
            }
        })
        .as_ref()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extract the word-character runs of `text`, preserving case
pub fn word_runs(text: &str) -> Vec<&str> {
    match word_regex() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => text
            .split(|c: char| !is_word_char(c))
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

/// Case-fold `text` and extract every maximal run of word characters.
///
/// No stop words are removed; callers that need filtering apply
/// [`is_stopword`] themselves.
pub fn word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_runs(&lowered).into_iter().map(str::to_string).collect()
}

/// Build the term-frequency vector of `text`
pub fn tokenize(text: &str) -> TermVector {
    TermVector::from_tokens(word_tokens(text))
}

/// Split text into sentences on `.`, `!`, `?` and `'`
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_ENDERS)
}

/// Content words of one sentence: word runs with stop words removed.
///
/// Stop word matching is case-insensitive; the returned tokens keep
/// their original case.
pub fn content_terms(sentence: &str) -> Vec<&str> {
    word_runs(sentence)
        .into_iter()
        .filter(|word| !is_stopword(&word.to_lowercase()))
        .collect()
}

/// Split text into trimmed, non-empty paragraphs on blank-line boundaries
pub fn paragraphs(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = match blank_line_regex() {
        Some(re) => re.split(text).collect(),
        None => text.split("\n\n").collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of whitespace-separated words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_chars` characters of `text`, with `...` appended when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_word_lists_differ() {
        assert!(is_stopword("just") && !is_passage_stopword("just"));
        assert!(is_passage_stopword("system") && !is_stopword("system"));
        assert!(is_stopword("the") && is_passage_stopword("the"));
    }

    #[test]
    fn test_word_tokens_case_folds() {
        let tokens = word_tokens("The Quick brown_fox, 42 times!");
        assert_eq!(tokens, vec!["the", "quick", "brown_fox", "42", "times"]);
    }

    #[test]
    fn test_word_tokens_keeps_stop_words() {
        let tokens = word_tokens("the a an and or");
        assert_eq!(tokens, vec!["the", "a", "an", "and", "or"]);
    }

    #[test]
    fn test_word_tokens_unicode_letters() {
        let tokens = word_tokens("Café déjà-vu");
        assert_eq!(tokens, vec!["café", "déjà", "vu"]);
    }

    #[test]
    fn test_tokenize_counts_frequencies() {
        let vector = tokenize("The cat and the hat. THE end.");
        assert_eq!(vector.get("the"), 3);
        assert_eq!(vector.get("cat"), 1);
        assert_eq!(vector.get("missing"), 0);
        assert_eq!(vector.len(), 5);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!! ").is_empty());
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stopword("the"));
        assert!(is_stopword("over"));
        assert!(is_stopword("wouldn't"));
        assert!(!is_stopword("fox"));
        assert!(!is_stopword("The"));
    }

    #[test]
    fn test_sentences_split_on_enders_and_apostrophe() {
        let parts: Vec<&str> = sentences("One. Two! Three? Don't").collect();
        assert_eq!(parts, vec!["One", " Two", " Three", " Don", "t"]);
    }

    #[test]
    fn test_content_terms_drop_stop_words_keep_case() {
        let terms = content_terms("The Quick brown fox jumps over the lazy dog");
        assert_eq!(terms, vec!["Quick", "brown", "fox", "jumps", "lazy", "dog"]);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "First para\nstill first.\n\nSecond para.\r\n  \r\nThird.\n\n\n";
        let paras = paragraphs(text);
        assert_eq!(
            paras,
            vec!["First para\nstill first.", "Second para.", "Third."]
        );
    }

    #[test]
    fn test_paragraphs_empty() {
        assert!(paragraphs("").is_empty());
        assert!(paragraphs("\n\n \n\n").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\tthree\nfour "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 200), "short");
        assert_eq!(preview("abcdef", 6), "abcdef");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
    }
}
