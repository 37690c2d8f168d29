//! Compiled regex patterns for segmentation and scoring.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Segmentation Patterns
// =============================================================================

/// One sentence: a run of non-terminators plus any trailing terminators
/// (`。！？.!?`).
///
/// A tail without a terminator still matches, so text with no boundary at
/// all comes back as a single sentence. A run of bare terminators does not.
pub static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^。！？.!?]+[。！？.!?]*").expect("SENTENCE regex")
});

/// Line breaks. Collapsed to one space for normalization, and used as the
/// paragraph separator on the raw input.
pub static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\r\n]+").expect("LINE_BREAKS regex")
});

// =============================================================================
// Tokenization Patterns
// =============================================================================

/// Anything that cannot be part of a term: not a CJK ideograph, ASCII
/// letter or digit.
pub static NON_TERM_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x{4e00}-\x{9fa5}A-Za-z0-9]+").expect("NON_TERM_CHARS regex")
});

// =============================================================================
// Scoring Patterns
// =============================================================================

/// Discourse markers that announce a conclusion or the gist of a text.
pub static SUMMARY_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(总之|总而言之|综上|综上所述|因此|所以|总结|本文|本篇|主要|核心|关键|\b(?:therefore|thus|in summary|in conclusion|to summarize|overall|this (?:article|paper|post)|mainly|core|key)\b)",
    )
    .expect("SUMMARY_CUE regex")
});

/// Any ASCII digit.
pub static DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]").expect("DIGIT regex")
});

/// Two or more consecutive uppercase ASCII letters (acronyms, tickers).
pub static ACRONYM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]{2,}").expect("ACRONYM regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_matches_terminated_and_tail_spans() {
        let found: Vec<&str> = SENTENCE
            .find_iter("今天很好。我们走吧！Then what")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["今天很好。", "我们走吧！", "Then what"]);
    }

    #[test]
    fn sentence_absorbs_repeated_terminators() {
        let found: Vec<&str> = SENTENCE.find_iter("Really?!? Yes.").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["Really?!?", " Yes."]);
    }

    #[test]
    fn sentence_ignores_bare_terminators() {
        assert!(SENTENCE.find("。。。!!").is_none());
    }

    #[test]
    fn non_term_chars_splits_on_punctuation_and_kana() {
        let cleaned = NON_TERM_CHARS.replace_all("Rust语言，很快！ひらがな v1.0", " ");
        assert_eq!(cleaned, "Rust语言 很快 v1 0");
    }

    #[test]
    fn summary_cue_matches_chinese_and_english_markers() {
        assert!(SUMMARY_CUE.is_match("总之，这是一个好方法。"));
        assert!(SUMMARY_CUE.is_match("In conclusion, it works."));
        assert!(SUMMARY_CUE.is_match("This article explains caching."));
        assert!(!SUMMARY_CUE.is_match("The score was high."));
    }

    #[test]
    fn acronym_requires_two_capitals() {
        assert!(ACRONYM.is_match("The API is stable."));
        assert!(!ACRONYM.is_match("A quiet Monday."));
    }
}
