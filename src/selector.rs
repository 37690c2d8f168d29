//! Greedy, redundancy-aware sentence selection under a character budget.

use crate::scorer::ScoredSentence;

/// Limits applied while selecting.
#[derive(Debug, Clone, Copy)]
pub struct SelectionBudget<'a> {
    /// Soft cap on the joined length in characters.
    pub max_len: usize,
    /// Candidates more similar than this to an accepted sentence are skipped.
    pub similarity_threshold: f64,
    /// Separator placed between accepted sentences; counts against `max_len`.
    pub separator: &'a str,
}

/// Position-aligned similarity of two strings.
///
/// Counts the positions `0..min(len(a), len(b))` holding the same
/// character and divides by that minimum length. This is not an edit
/// distance: a single inserted character at the front shifts every later
/// position. Returns `0.0` when either string is empty.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let min_len = a.chars().count().min(b.chars().count());
    if min_len == 0 {
        return 0.0;
    }

    let same = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    same as f64 / min_len as f64
}

/// Pick high-scoring, mutually dissimilar sentences within the budget.
///
/// Candidates are visited by descending score, ties in document order. A
/// candidate that would overflow the budget is skipped but scanning goes
/// on, so a shorter, lower-ranked sentence may still fit. Scanning stops
/// once the budget is reached. The result is in selection order.
#[must_use]
pub fn select(scored: Vec<ScoredSentence>, budget: &SelectionBudget<'_>) -> Vec<ScoredSentence> {
    let mut ranked = scored;
    // Stable: equal scores keep document order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let separator_len = budget.separator.chars().count();
    let mut selected: Vec<ScoredSentence> = Vec::new();
    let mut running_len = 0;

    for candidate in ranked {
        let joint = if selected.is_empty() { 0 } else { separator_len };
        let added = joint + candidate.sentence.char_len();

        if running_len + added > budget.max_len {
            tracing::trace!(index = candidate.sentence.index, "skipped: over budget");
            continue;
        }

        let redundant = selected.iter().any(|chosen| {
            similarity(&chosen.sentence.text, &candidate.sentence.text) > budget.similarity_threshold
        });
        if redundant {
            tracing::trace!(index = candidate.sentence.index, "skipped: near duplicate");
            continue;
        }

        running_len += added;
        selected.push(candidate);

        if running_len >= budget.max_len {
            break;
        }
    }

    selected
}
