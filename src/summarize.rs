//! Mode dispatch and the smart summarization pipeline.
//!
//! Smart mode runs segmentation, feature extraction, scoring, selection and
//! assembly. The other modes are prefix truncation or pass-through. Every
//! path is total: any input produces a string.

use serde::Serialize;

use crate::assembler::{self, Assembled};
use crate::document::Document;
use crate::features::DocumentFeatures;
use crate::mode::Mode;
use crate::options::Options;
use crate::scorer;
use crate::segmenter;
use crate::selector::{self, SelectionBudget};

/// A summary together with what it took to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    /// The summary text, ellipsis included when content was omitted.
    pub summary: String,

    /// Mode that produced the summary.
    pub mode: Mode,

    /// Sentences found in the input. Zero for non-smart modes.
    pub total_sentences: usize,

    /// Sentences kept in the summary. Zero for non-smart modes and for
    /// the prefix fallback.
    pub selected_sentences: usize,

    /// Whether the ellipsis marker was appended.
    pub truncated: bool,
}

impl SummaryResult {
    fn plain(mode: Mode, assembled: Assembled) -> Self {
        Self {
            summary: assembled.text,
            mode,
            total_sentences: 0,
            selected_sentences: 0,
            truncated: assembled.truncated,
        }
    }
}

/// Summarize `text` in the given mode and report details.
#[must_use]
pub fn summarize_detailed(text: &str, mode: Mode, options: &Options) -> SummaryResult {
    let document = Document::new(text);
    tracing::debug!(
        mode = %mode,
        chars = document.char_len(),
        "summarizing document"
    );

    if document.is_empty() {
        return SummaryResult::plain(
            mode,
            Assembled {
                text: String::new(),
                truncated: false,
            },
        );
    }

    match mode {
        Mode::Smart => smart(&document, options),
        Mode::First => SummaryResult::plain(
            mode,
            assembler::truncate_prefix(document.normalized(), options.first_max_len, &options.ellipsis),
        ),
        Mode::Length => SummaryResult::plain(
            mode,
            assembler::truncate_prefix(document.normalized(), options.length_max_len, &options.ellipsis),
        ),
        Mode::PassThrough => SummaryResult::plain(
            mode,
            Assembled {
                text: document.normalized().to_string(),
                truncated: false,
            },
        ),
    }
}

fn smart(document: &Document<'_>, options: &Options) -> SummaryResult {
    let normalized = document.normalized();
    let sentences = segmenter::split_sentences(normalized);
    let total_sentences = sentences.len();

    if sentences.is_empty() {
        tracing::debug!("no sentences found; falling back to prefix");
        return prefix_fallback(document, options, 0);
    }

    let paragraphs = document.paragraphs();
    let features = DocumentFeatures::extract(normalized, &paragraphs, options.min_term_len);
    tracing::debug!(
        sentences = total_sentences,
        paragraphs = paragraphs.len(),
        terms = features.frequencies.len(),
        title_terms = features.title_terms.len(),
        "extracted features"
    );

    let scored = scorer::score_sentences(sentences, &features, &options.weights);
    let budget = SelectionBudget {
        max_len: options.smart_max_len,
        similarity_threshold: options.similarity_threshold,
        separator: &options.sentence_separator,
    };
    let selected = selector::select(scored, &budget);

    if selected.is_empty() {
        tracing::debug!("every sentence exceeds the budget; falling back to prefix");
        return prefix_fallback(document, options, total_sentences);
    }

    let selected_sentences = selected.len();
    tracing::debug!(selected = selected_sentences, "selected sentences");

    let assembled = assembler::assemble(
        selected,
        document.char_len(),
        &options.sentence_separator,
        &options.ellipsis,
    );

    SummaryResult {
        summary: assembled.text,
        mode: Mode::Smart,
        total_sentences,
        selected_sentences,
        truncated: assembled.truncated,
    }
}

fn prefix_fallback(document: &Document<'_>, options: &Options, total_sentences: usize) -> SummaryResult {
    let assembled =
        assembler::truncate_prefix(document.normalized(), options.smart_max_len, &options.ellipsis);
    SummaryResult {
        total_sentences,
        ..SummaryResult::plain(Mode::Smart, assembled)
    }
}
