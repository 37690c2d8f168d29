//! # rs-summarize
//!
//! Model-free extractive summarization for short documents.
//!
//! The smart mode splits text into sentences, scores each one from term
//! frequencies, title keywords, paragraph position and a few surface cues,
//! then greedily keeps the best non-redundant sentences within a character
//! budget and puts them back in document order. Simpler prefix and
//! pass-through modes are available for callers that want them.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_summarize::summarize;
//!
//! let text = "今天天气很好。我们去公园散步。公园里有很多花。";
//! assert_eq!(summarize(text, Some("first")), text);
//!
//! let long = "a".repeat(200);
//! assert_eq!(summarize(&long, Some("length")), format!("{} ……", "a".repeat(80)));
//! ```
//!
//! ## Modes
//!
//! - **smart** (default): scored sentence selection, 120 characters
//! - **first**: first 100 characters
//! - **length**: first 80 characters
//! - anything else: the normalized text, unshortened
//!
//! Every function here is total. Empty or whitespace-only input yields an
//! empty summary in every mode.

mod error;
mod options;
mod patterns;

/// Mode selection.
pub mod mode;

/// Input normalization and paragraph splitting.
pub mod document;

/// Sentence segmentation.
pub mod segmenter;

/// Term frequencies, title terms and paragraph leads.
pub mod features;

/// Sentence scoring.
pub mod scorer;

/// Redundancy-aware sentence selection.
pub mod selector;

/// Summary assembly and prefix truncation.
pub mod assembler;

/// Mode dispatch and the smart pipeline.
pub mod summarize;

/// Character encoding detection for byte input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use mode::Mode;
pub use options::{Options, ScoringWeights};
pub use summarize::{summarize_detailed, SummaryResult};

/// Summarizes text with default options.
///
/// `mode` is one of `"smart"`, `"first"` or `"length"`; `None` or an empty
/// string means `"smart"`, and any other value returns the normalized
/// text unchanged.
///
/// # Example
///
/// ```rust
/// use rs_summarize::summarize;
///
/// assert_eq!(summarize("", Some("smart")), "");
/// assert_eq!(summarize("one\ntwo", Some("raw")), "one two");
/// ```
#[must_use]
pub fn summarize(text: &str, mode: Option<&str>) -> String {
    summarize_with_options(text, Mode::parse(mode), &Options::default())
}

/// Summarizes text with custom options.
///
/// # Example
///
/// ```rust
/// use rs_summarize::{summarize_with_options, Mode, Options};
///
/// let options = Options {
///     first_max_len: 5,
///     ellipsis: "...".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(summarize_with_options("abcdefgh", Mode::First, &options), "abcde...");
/// ```
#[must_use]
pub fn summarize_with_options(text: &str, mode: Mode, options: &Options) -> String {
    summarize_detailed(text, mode, options).summary
}

/// Summarizes raw bytes with default options, detecting the encoding first.
///
/// # Example
///
/// ```rust
/// use rs_summarize::summarize_bytes;
///
/// // UTF-8 with a byte order mark
/// let bytes = b"\xEF\xBB\xBFShort text.";
/// assert_eq!(summarize_bytes(bytes, None), "Short text.");
/// ```
#[must_use]
pub fn summarize_bytes(bytes: &[u8], mode: Option<&str>) -> String {
    let text = encoding::decode_text(bytes);
    summarize(&text, mode)
}
