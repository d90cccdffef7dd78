//! Query Normalization
//!
//! Lowercasing, tokenization, and stopword removal for free-text queries.
//! The stopword list covers articles, pronouns, auxiliary verbs, and the
//! question words that carry no intent signal on their own.

use std::collections::HashSet;

/// Default English stopword list.
///
/// Filler words stripped before keyword matching. Deliberately small:
/// anything that could itself be an intent keyword must stay out.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "can", "could",
    "did", "do", "does", "for", "give", "has", "have", "how", "i", "if",
    "in", "into", "is", "it", "its", "me", "most", "my", "no", "not", "of",
    "on", "or", "s", "should", "so", "some", "such", "that", "the", "their",
    "then", "there", "these", "they", "this", "to", "was", "we", "what",
    "which", "who", "will", "with", "would", "you", "your",
];

/// A query after normalization.
///
/// Keeps both the cleaned full text (for phrase matching) and the token
/// set (for single-word keyword membership).
#[derive(Clone, Debug)]
pub struct NormalizedQuery {
    /// Lowercased, trimmed input text.
    pub text: String,

    /// Tokens with stopwords removed.
    pub tokens: HashSet<String>,
}

impl NormalizedQuery {
    /// Membership test against the filtered token set.
    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    /// Substring test against the lowercased raw text.
    ///
    /// Used for multi-word keywords ("trending up"), which tokenization
    /// would split apart.
    pub fn has_phrase(&self, phrase: &str) -> bool {
        self.text.contains(phrase)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.text.is_empty()
    }
}

/// Text normalizer with a configurable stopword set.
#[derive(Clone, Debug)]
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default English stopword set.
    pub fn new() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Create with a custom stopword set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Extend the default set with additional words.
    pub fn with_extra_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalizer = Self::new();
        normalizer
            .stop_words
            .extend(words.into_iter().map(Into::into));
        normalizer
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Normalize a raw query: lowercase, trim, tokenize on non-alphanumeric
    /// boundaries, drop stopwords.
    pub fn normalize(&self, raw: &str) -> NormalizedQuery {
        let text = raw.trim().to_lowercase();

        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect();

        NormalizedQuery { text, tokens }
    }
}
