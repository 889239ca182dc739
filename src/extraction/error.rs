use thiserror::Error;

use crate::document::DocumentFormat;

/// Errors raised while turning document bytes into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The declared or inferred format is not plain, PDF or Word.
    #[error("unsupported document format: {format}")]
    UnsupportedFormat { format: String },

    /// Plain-text bytes are not valid UTF-8.
    #[error("invalid text encoding: {reason}")]
    InvalidEncoding { reason: String },

    /// The PDF or Word parser rejected the bytes.
    #[error("failed to extract text from {format} document: {reason}")]
    ExtractionFailure {
        format: DocumentFormat,
        reason: String,
    },
}

impl From<std::string::FromUtf8Error> for ExtractionError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExtractionError::InvalidEncoding {
            reason: err.to_string(),
        }
    }
}
