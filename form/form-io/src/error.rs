//! Error types for form I/O operations.

use thiserror::Error;

/// Result type for form I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing forms and scene documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IoError {
    /// Invalid file content.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Unsupported scene document version.
    #[error("unsupported document version: {version}")]
    UnsupportedVersion {
        /// Version string found in the document.
        version: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
