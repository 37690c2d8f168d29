//! Summarization modes.

use std::fmt;

use serde::Serialize;

/// How a text should be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Score, select and reassemble sentences within a character budget.
    #[default]
    Smart,
    /// Plain prefix of `first_max_len` characters.
    First,
    /// Plain prefix of `length_max_len` characters.
    Length,
    /// Normalized text, unshortened.
    PassThrough,
}

impl Mode {
    /// Resolve a caller-supplied mode name.
    ///
    /// A missing or empty name means [`Mode::Smart`]. Names are matched
    /// exactly; anything unrecognized passes the text through.
    ///
    /// ```rust
    /// use rs_summarize::Mode;
    ///
    /// assert_eq!(Mode::parse(None), Mode::Smart);
    /// assert_eq!(Mode::parse(Some("first")), Mode::First);
    /// assert_eq!(Mode::parse(Some("FIRST")), Mode::PassThrough);
    /// ```
    #[must_use]
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            None | Some("" | "smart") => Self::Smart,
            Some("first") => Self::First,
            Some("length") => Self::Length,
            Some(_) => Self::PassThrough,
        }
    }

    /// Canonical name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::First => "first",
            Self::Length => "length",
            Self::PassThrough => "passthrough",
        }
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Self::parse(Some(name))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_mode_is_smart() {
        assert_eq!(Mode::parse(None), Mode::Smart);
        assert_eq!(Mode::parse(Some("")), Mode::Smart);
        assert_eq!(Mode::default(), Mode::Smart);
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(Mode::from("smart"), Mode::Smart);
        assert_eq!(Mode::from("first"), Mode::First);
        assert_eq!(Mode::from("length"), Mode::Length);
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(Mode::from("raw"), Mode::PassThrough);
        assert_eq!(Mode::from("Smart"), Mode::PassThrough);
        assert_eq!(Mode::from(" first"), Mode::PassThrough);
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(Mode::Smart.to_string(), "smart");
        assert_eq!(Mode::PassThrough.to_string(), "passthrough");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Length).ok().as_deref(), Some("\"length\""));
        assert_eq!(
            serde_json::to_string(&Mode::PassThrough).ok().as_deref(),
            Some("\"passthrough\"")
        );
    }
}
