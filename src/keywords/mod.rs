//! Keyword extraction for overlap-based justifications.
//!
//! Text is lowercased, stripped of ASCII punctuation and split on whitespace.
//! Tokens longer than [`MIN_KEYWORD_EXCLUSIVE_LEN`] characters that are not
//! stop words form the [`KeywordSet`].


use std::collections::BTreeSet;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{
    KEYWORD_SEPARATOR, MIN_KEYWORD_EXCLUSIVE_LEN, NO_MATCH_MESSAGE, STOP_WORDS, TRUNCATION_MARKER,
};

/// A set of significant, normalized words.
///
/// Backed by a `BTreeSet` so iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    /// Keywords in lexicographic ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keywords present in both sets.
    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// The first `n` keywords in lexicographic order.
    pub fn top(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    /// Human-readable justification for a match: up to `max_keywords` sorted
    /// keywords joined with `", "` plus the truncation marker, or
    /// [`NO_MATCH_MESSAGE`] when the set is empty.
    pub fn justification(&self, max_keywords: usize) -> String {
        if self.is_empty() {
            return NO_MATCH_MESSAGE.to_string();
        }

        let mut justification = self.top(max_keywords).join(KEYWORD_SEPARATOR);
        justification.push_str(TRUNCATION_MARKER);
        justification
    }

    /// Space-joined keywords in lexicographic order.
    pub fn to_text(&self) -> String {
        self.top(self.len()).join(" ")
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Derives [`KeywordSet`]s from text using a fixed stop-word list.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    min_exclusive_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            min_exclusive_len: MIN_KEYWORD_EXCLUSIVE_LEN,
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the keyword set of `text`.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        normalized
            .split_whitespace()
            .filter(|token| token.chars().count() > self.min_exclusive_len)
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

/// Extracts keywords with the default stop-word list.
pub fn extract_keywords(text: &str) -> KeywordSet {
    KeywordExtractor::default().extract(text)
}
