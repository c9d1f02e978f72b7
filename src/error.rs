//! Error types for news-extractor.
//!
//! Only [`Error::MalformedInput`] ever escapes the extraction entry points.
//! Everything else is raised by a lower layer and absorbed by the caller that
//! tried it: a bad selector just matches nothing, a broken item is skipped.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input cannot be treated as markup at all (empty or blank).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A selector string is syntactically invalid.
    #[error("Invalid selector `{selector}`: {message}")]
    SelectorEvaluation {
        /// The selector as written.
        selector: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A single container element could not be turned into a record.
    #[error("Item extraction failed: {0}")]
    ItemExtraction(String),

    /// A URL could not be parsed or resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Site profile configuration could not be deserialized.
    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
