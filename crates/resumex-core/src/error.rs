//! Error types for the resumex-core library.

use thiserror::Error;

/// Main error type for the resumex library.
#[derive(Error, Debug)]
pub enum ResumexError {
    /// Text extraction error.
    #[error("text extraction error: {0}")]
    Text(#[from] TextError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to file text extraction.
///
/// These never escape [`crate::text::extract_text`], which degrades to an
/// empty string; they exist so the internal per-format readers can report
/// what went wrong to the fallback logic.
#[derive(Error, Debug)]
pub enum TextError {
    /// File does not exist or cannot be stat'd.
    #[error("file not found: {0}")]
    NotFound(String),

    /// File exists but has no content.
    #[error("file is empty: {0}")]
    Empty(String),

    /// Failed to decode text from a PDF.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// The PDF is encrypted and could not be decrypted.
    #[error("PDF is encrypted")]
    Encrypted,

    /// Failed to read file bytes.
    #[error("failed to read file: {0}")]
    Read(String),
}

/// Result type for the resumex library.
pub type Result<T> = std::result::Result<T, ResumexError>;
