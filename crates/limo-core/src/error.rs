//! Error types for the limo-core library.

use thiserror::Error;

/// Main error type for the limo library.
#[derive(Error, Debug)]
pub enum LimoError {
    /// Lead extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to lead field extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The input text was empty or whitespace only.
    #[error("no text provided")]
    EmptyInput,

    /// No form mapping is defined for the requested form.
    #[error("no mappings found for form type: {0}")]
    UnknownFormType(String),
}

/// Result type for the limo library.
pub type Result<T> = std::result::Result<T, LimoError>;
