//! Sentence scoring.
//!
//! A sentence's importance is a flat sum of independent signals. Weights
//! live in [`ScoringWeights`]; the structure of the sum lives here.
//!
//! Term matching is by substring containment, not token membership: a
//! sentence containing `"cache"` also collects the count of `"ca"` if that
//! is a term. Overlapping terms are therefore counted more than once.

use crate::features::DocumentFeatures;
use crate::options::ScoringWeights;
use crate::patterns::{ACRONYM, DIGIT, SUMMARY_CUE};
use crate::segmenter::Sentence;

/// A sentence paired with its importance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// May be negative; never clamped.
    pub score: f64,
}

/// Score a single sentence against the document features.
#[must_use]
pub fn score_sentence(
    sentence: &Sentence,
    features: &DocumentFeatures,
    weights: &ScoringWeights,
) -> f64 {
    let text = sentence.text.as_str();
    let mut score = 0.0;

    // Frequency
    score += features
        .frequencies
        .iter()
        .filter(|(term, _)| text.contains(term))
        .map(|(_, count)| count as f64)
        .sum::<f64>();

    // Title keywords
    let title_hits = features
        .title_terms
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .count();
    score += weights.title_bonus * title_hits as f64;

    if features.leading_sentences.contains(text.trim()) {
        score += weights.paragraph_lead_bonus;
    }

    score += position_bonus(sentence.index, weights.position_decay_base);

    if SUMMARY_CUE.is_match(text) {
        score += weights.cue_bonus;
    }

    if DIGIT.is_match(text) {
        score += weights.digit_bonus;
    }
    if ACRONYM.is_match(text) {
        score += weights.acronym_bonus;
    }

    let len = sentence.char_len();
    if len < weights.short_threshold {
        score -= weights.short_penalty;
    }
    if len > weights.long_penalty_threshold {
        score -= weights.long_penalty;
    }

    score
}

/// Score every sentence, keeping input order.
#[must_use]
pub fn score_sentences(
    sentences: Vec<Sentence>,
    features: &DocumentFeatures,
    weights: &ScoringWeights,
) -> Vec<ScoredSentence> {
    sentences
        .into_iter()
        .map(|sentence| {
            let score = score_sentence(&sentence, features, weights);
            tracing::trace!(index = sentence.index, score, "scored sentence");
            ScoredSentence { sentence, score }
        })
        .collect()
}

/// `max(0, base - index)`.
fn position_bonus(index: usize, base: f64) -> f64 {
    (base - index as f64).max(0.0)
}
