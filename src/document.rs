//! Input normalization and paragraph splitting.

use crate::patterns::LINE_BREAKS;

/// A single summarization input: the raw text and its normalized form.
///
/// Normalization collapses every run of line breaks into one space and
/// trims the ends. Characters are never reordered or dropped otherwise.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    original: &'a str,
    normalized: String,
}

impl<'a> Document<'a> {
    /// Build a document from raw input.
    #[must_use]
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            normalized: normalize(original),
        }
    }

    /// The normalized text the pipeline works on.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Normalized length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.normalized.chars().count()
    }

    /// `true` when nothing but whitespace was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Paragraphs of the raw input, in order.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&'a str> {
        split_paragraphs(self.original)
    }
}

/// Collapse line breaks to single spaces and trim.
#[must_use]
pub fn normalize(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").trim().to_string()
}

/// Split raw text on runs of line breaks, trimming each chunk and dropping
/// the ones left empty.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    LINE_BREAKS
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
