//! Error types for the AI-assisted path.

use thiserror::Error;

/// Errors from the AI-assisted extractor and ranker.
#[derive(Error, Debug)]
pub enum AiError {
    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The service reply could not be parsed into the expected shape.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

/// Result type for the AI-assisted path.
pub type AiResult<T> = std::result::Result<T, AiError>;
