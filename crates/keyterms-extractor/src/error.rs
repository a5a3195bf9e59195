//! Error types for the aggregation pipeline

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type ExtractorResult<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur while processing a link
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Retrieval of the document payload failed (network, status, timeout)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The payload could not be parsed as a structured document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The expected text field is absent from the document
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Syntax analysis of a paragraph failed (validation, service, timeout)
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::InvalidDocument(e.to_string())
    }
}
