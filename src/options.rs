//! Configuration options for summarization.
//!
//! The `Options` struct controls length budgets, redundancy filtering and
//! the scoring constants. All fields are public; use `Default::default()`
//! for standard settings or load a (partial) JSON document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning constants for the sentence scorer.
///
/// Every signal the scorer combines has its weight here so the heuristic
/// can be adjusted without touching the scoring code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bonus per title term contained in a sentence.
    ///
    /// Default: `6.0`
    pub title_bonus: f64,

    /// Bonus for a sentence that opens a paragraph.
    ///
    /// Default: `8.0`
    pub paragraph_lead_bonus: f64,

    /// Position bonus is `max(0, position_decay_base - index)`.
    ///
    /// Default: `6.0`
    pub position_decay_base: f64,

    /// Bonus for sentences carrying a conclusion/summary cue.
    ///
    /// Default: `6.0`
    pub cue_bonus: f64,

    /// Bonus for sentences containing a digit.
    ///
    /// Default: `2.0`
    pub digit_bonus: f64,

    /// Bonus for sentences containing an all-caps run of two or more letters.
    ///
    /// Default: `2.0`
    pub acronym_bonus: f64,

    /// Sentences with fewer characters than this are penalized.
    ///
    /// Default: `8`
    pub short_threshold: usize,

    /// Penalty subtracted from short sentences.
    ///
    /// Default: `6.0`
    pub short_penalty: f64,

    /// Sentences with more characters than this are penalized.
    ///
    /// Default: `80`
    pub long_penalty_threshold: usize,

    /// Penalty subtracted from long sentences.
    ///
    /// Default: `4.0`
    pub long_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_bonus: 6.0,
            paragraph_lead_bonus: 8.0,
            position_decay_base: 6.0,
            cue_bonus: 6.0,
            digit_bonus: 2.0,
            acronym_bonus: 2.0,
            short_threshold: 8,
            short_penalty: 6.0,
            long_penalty_threshold: 80,
            long_penalty: 4.0,
        }
    }
}

/// Configuration options for summarization.
///
/// # Example
///
/// ```rust
/// use rs_summarize::Options;
///
/// let options = Options {
///     smart_max_len: 200,
///     sentence_separator: " ".to_string(),
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Character budget for `smart` mode.
    ///
    /// Default: `120`
    pub smart_max_len: usize,

    /// Prefix length for `first` mode.
    ///
    /// Default: `100`
    pub first_max_len: usize,

    /// Prefix length for `length` mode.
    ///
    /// Default: `80`
    pub length_max_len: usize,

    /// Two sentences count as near-duplicates when their position-aligned
    /// similarity is strictly greater than this.
    ///
    /// Default: `0.6`
    pub similarity_threshold: f64,

    /// Minimum term length (characters) for frequency and title terms.
    ///
    /// Default: `2`
    pub min_term_len: usize,

    /// Marker appended when content was omitted.
    ///
    /// Default: `" ……"`
    pub ellipsis: String,

    /// Joins selected sentences in `smart` mode. Counted against the budget.
    ///
    /// Default: `""`
    pub sentence_separator: String,

    /// Scoring constants.
    pub weights: ScoringWeights,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            smart_max_len: 120,
            first_max_len: 100,
            length_max_len: 80,
            similarity_threshold: 0.6,
            min_term_len: 2,
            ellipsis: " ……".to_string(),
            sentence_separator: String::new(),
            weights: ScoringWeights::default(),
        }
    }
}

impl Options {
    /// Check that the options describe a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` when a budget is zero or the
    /// similarity threshold lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidOptions(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }

        for (name, value) in [
            ("smart_max_len", self.smart_max_len),
            ("first_max_len", self.first_max_len),
            ("length_max_len", self.length_max_len),
        ] {
            if value == 0 {
                return Err(Error::InvalidOptions(format!("{name} must be greater than 0")));
            }
        }

        if self.min_term_len == 0 {
            return Err(Error::InvalidOptions("min_term_len must be greater than 0".to_string()));
        }

        Ok(())
    }

    /// Parse options from a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidJson` for malformed JSON and
    /// `Error::InvalidOptions` when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, otherwise the same
    /// errors as [`Options::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading summarizer options");
        Self::from_json_str(&json)
    }
}
