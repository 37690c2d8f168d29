//! Properties that must hold for arbitrary input.

use proptest::prelude::*;
use rs_summarize::document::normalize;
use rs_summarize::segmenter::split_sentences;
use rs_summarize::selector::similarity;
use rs_summarize::{summarize, summarize_detailed, Mode, Options};

const MARKER: &str = " ……";

fn strip_marker(summary: &str) -> &str {
    summary.strip_suffix(MARKER).unwrap_or(summary)
}

/// Mixed CJK/ASCII text with terminators, digits, capitals and line breaks.
fn text_strategy() -> impl Strategy<Value = String> {
    "[甲乙丙丁戊缓存设计总之abcdeXYZ0-9 ,，。！？.!?\n]{0,400}"
}

/// Like [`text_strategy`] but without whitespace, so re-segmenting a
/// summary gives back exactly the sentences that were compared while
/// selecting.
fn dense_text_strategy() -> impl Strategy<Value = String> {
    "[甲乙丙丁戊缓存设计总之abcdeXYZ0-9,，。！？.!?]{0,400}"
}

proptest! {
    #[test]
    fn first_mode_is_bounded_prefix(text in text_strategy()) {
        let normalized = normalize(&text);
        let summary = summarize(&text, Some("first"));
        let body = strip_marker(&summary);

        prop_assert!(body.chars().count() <= 100);
        prop_assert!(normalized.starts_with(body));
        prop_assert_eq!(summary.len() > body.len(), normalized.chars().count() > 100);
    }

    #[test]
    fn length_mode_is_bounded_prefix(text in text_strategy()) {
        let normalized = normalize(&text);
        let summary = summarize(&text, Some("length"));
        let body = strip_marker(&summary);

        prop_assert!(body.chars().count() <= 80);
        prop_assert!(normalized.starts_with(body));
        prop_assert_eq!(summary.len() > body.len(), normalized.chars().count() > 80);
    }

    #[test]
    fn smart_mode_is_bounded(text in text_strategy()) {
        let summary = summarize(&text, Some("smart"));
        prop_assert!(summary.chars().count() <= 120 + MARKER.chars().count());
    }

    #[test]
    fn smart_then_first_yields_prefix(text in text_strategy()) {
        let smart = summarize(&text, Some("smart"));
        let again = summarize(&smart, Some("first"));
        prop_assert!(smart.starts_with(strip_marker(&again)));
    }

    #[test]
    fn identical_input_gives_identical_output(text in text_strategy()) {
        for mode in ["smart", "first", "length", "other"] {
            prop_assert_eq!(summarize(&text, Some(mode)), summarize(&text, Some(mode)));
        }
    }

    #[test]
    fn whitespace_only_input_is_empty(text in "[ \t\n]{0,50}") {
        for mode in [None, Some("smart"), Some("first"), Some("length"), Some("x")] {
            prop_assert_eq!(summarize(&text, mode), "");
        }
    }

    #[test]
    fn smart_sentences_keep_source_order(text in text_strategy()) {
        let result = summarize_detailed(&text, Mode::Smart, &Options::default());
        prop_assume!(result.selected_sentences > 0);

        let normalized = normalize(&text);
        let mut cursor = 0;
        for sentence in split_sentences(strip_marker(&result.summary)) {
            let found = normalized[cursor..].find(&sentence.text);
            prop_assert!(found.is_some(), "{:?} out of order in {:?}", sentence.text, normalized);
            cursor += found.unwrap_or(0) + sentence.text.len();
        }
    }

    #[test]
    fn smart_marker_means_content_was_left_out(text in text_strategy()) {
        let result = summarize_detailed(&text, Mode::Smart, &Options::default());
        let body = strip_marker(&result.summary);
        let source_len = normalize(&text).chars().count();

        prop_assert_eq!(result.truncated, result.summary.len() > body.len());
        prop_assert_eq!(result.truncated, body.chars().count() < source_len);
    }

}

proptest! {
    // Most generated inputs are rejected by the assumptions below, so the
    // default global reject limit (1024) is too low to reach 256 cases.
    #![proptest_config(ProptestConfig {
        max_global_rejects: 16384,
        ..ProptestConfig::default()
    })]

    #[test]
    fn keeping_every_sentence_reproduces_the_input(text in text_strategy()) {
        let normalized = normalize(&text);
        // Terminators before the first sentence belong to no sentence.
        prop_assume!(!normalized.starts_with(['。', '！', '？', '.', '!', '?']));

        let result = summarize_detailed(&text, Mode::Smart, &Options::default());
        prop_assume!(result.selected_sentences > 0);
        prop_assume!(result.selected_sentences == result.total_sentences);

        prop_assert_eq!(&result.summary, &normalized);
        prop_assert!(!result.truncated);
    }

    #[test]
    fn smart_sentences_are_not_near_duplicates(text in dense_text_strategy()) {
        let result = summarize_detailed(&text, Mode::Smart, &Options::default());
        prop_assume!(result.selected_sentences > 1);

        let sentences = split_sentences(strip_marker(&result.summary));
        for (i, a) in sentences.iter().enumerate() {
            for b in &sentences[i + 1..] {
                prop_assert!(similarity(&a.text, &b.text) <= 0.6);
            }
        }
    }
}
