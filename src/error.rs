//! Error types for rs-summarize.
//!
//! Summarization itself never fails. These errors only come from the
//! surfaces around it: loading options and decoding CLI requests.

/// Error type for configuration and request handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading an options file or stdin failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document (options file or request body) could not be parsed.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Options parsed but hold values the summarizer cannot work with.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for configuration and request handling.
pub type Result<T> = std::result::Result<T, Error>;
