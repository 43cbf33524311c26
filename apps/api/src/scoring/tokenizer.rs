//! Tokenizer: normalizes raw text into lowercase keyword tokens.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

/// Common English function words that never count as keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

/// Tokens must be strictly longer than this many characters.
const MIN_TOKEN_CHARS: usize = 2;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"));

/// Extracts keyword tokens from `text` in document order (duplicates kept).
///
/// Lowercases, replaces every non-word, non-whitespace character with a space,
/// splits on whitespace, then drops stop words and tokens of two characters or fewer.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Deduplicated keyword tokens, kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet(IndexSet<String>);

impl TokenSet {
    pub fn from_text(text: &str) -> Self {
        extract_keywords(text).into_iter().collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        TokenSet(iter.into_iter().collect())
    }
}
