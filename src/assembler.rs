//! Summary assembly: restore document order, join, mark truncation.

use crate::scorer::ScoredSentence;

/// An assembled summary and whether content was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub text: String,
    pub truncated: bool,
}

/// Join selected sentences in document order and append `ellipsis` when
/// the result is shorter than the normalized source.
///
/// Lengths are compared in characters.
#[must_use]
pub fn assemble(
    mut selected: Vec<ScoredSentence>,
    source_len: usize,
    separator: &str,
    ellipsis: &str,
) -> Assembled {
    selected.sort_by_key(|s| s.sentence.index);

    let joined = selected
        .iter()
        .map(|s| s.sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(separator);

    finish(joined.trim(), source_len, ellipsis)
}

/// First `max_len` characters of `text`, plus `ellipsis` if anything was cut.
#[must_use]
pub fn truncate_prefix(text: &str, max_len: usize, ellipsis: &str) -> Assembled {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => Assembled {
            text: format!("{}{ellipsis}", &text[..cut]),
            truncated: true,
        },
        None => Assembled {
            text: text.to_string(),
            truncated: false,
        },
    }
}

fn finish(body: &str, source_len: usize, ellipsis: &str) -> Assembled {
    if body.chars().count() < source_len {
        Assembled {
            text: format!("{body}{ellipsis}"),
            truncated: true,
        }
    } else {
        Assembled {
            text: body.to_string(),
            truncated: false,
        }
    }
}
