//! Sentence segmentation.
//!
//! Sentences are maximal runs of non-terminator characters followed by any
//! terminators (`。！？.!?`). Matches are kept as found, including the
//! whitespace that separates them from the previous sentence, so joining
//! consecutive sentences gives back the source span. Matches holding only
//! whitespace are discarded. The surviving sentences keep their order of
//! appearance as a 0-based index.

use std::collections::HashSet;

use crate::patterns::SENTENCE;

/// One segmented sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position among the document's sentences, starting at 0.
    pub index: usize,
    /// Sentence text as matched, leading whitespace and terminators included.
    pub text: String,
}

impl Sentence {
    /// Sentence length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split text into indexed sentences.
///
/// Returns an empty vector only when the text holds nothing but
/// terminators and whitespace; callers fall back to a plain prefix then.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    sentence_spans(text)
        .enumerate()
        .map(|(index, text)| Sentence {
            index,
            text: text.to_string(),
        })
        .collect()
}

/// The first sentence of every paragraph, keyed by trimmed text.
///
/// Each paragraph is segmented on its own with the same rule as the
/// whole document.
#[must_use]
pub fn leading_sentences(paragraphs: &[&str]) -> HashSet<String> {
    paragraphs
        .iter()
        .filter_map(|p| sentence_spans(p).next())
        .map(|s| s.trim().to_string())
        .collect()
}

fn sentence_spans(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
}
