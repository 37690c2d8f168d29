//! Term features: document-wide frequencies and title keywords.
//!
//! Terms come from one tokenization rule used everywhere: every character
//! that is not a CJK ideograph, ASCII letter or digit becomes whitespace,
//! the text is split on whitespace, and tokens shorter than the minimum
//! term length are dropped. Case is preserved.

use std::collections::{HashMap, HashSet};

use crate::patterns::NON_TERM_CHARS;

/// Split text into terms of at least `min_len` characters.
#[must_use]
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    NON_TERM_CHARS
        .replace_all(text, " ")
        .split_whitespace()
        .filter(|token| token.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Occurrence counts of every term in a text.
///
/// Built once per summarization and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count the terms of `text`.
    #[must_use]
    pub fn build(text: &str, min_len: usize) -> Self {
        let mut counts = HashMap::new();
        for term in tokenize(text, min_len) {
            *counts.entry(term).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `term`, zero when absent.
    #[must_use]
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when the text held no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All `(term, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

/// Terms of the first paragraph, which usually acts as the title.
#[must_use]
pub fn title_terms(paragraphs: &[&str], min_len: usize) -> HashSet<String> {
    paragraphs
        .first()
        .map(|title| tokenize(title, min_len).into_iter().collect())
        .unwrap_or_default()
}

/// Everything the scorer needs to know about the document as a whole.
#[derive(Debug, Clone, Default)]
pub struct DocumentFeatures {
    /// Term counts over the normalized text.
    pub frequencies: FrequencyTable,
    /// Terms of the first paragraph.
    pub title_terms: HashSet<String>,
    /// First sentence of every paragraph.
    pub leading_sentences: HashSet<String>,
}

impl DocumentFeatures {
    /// Extract features from the normalized text and the raw paragraphs.
    #[must_use]
    pub fn extract(normalized: &str, paragraphs: &[&str], min_len: usize) -> Self {
        Self {
            frequencies: FrequencyTable::build(normalized, min_len),
            title_terms: title_terms(paragraphs, min_len),
            leading_sentences: crate::segmenter::leading_sentences(paragraphs),
        }
    }
}
