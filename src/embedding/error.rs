//! Embedding error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the sentence model or encoding text.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The model directory or one of its files is missing.
    #[error("sentence model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    /// Weights, config or tokenizer could not be loaded.
    #[error("failed to load sentence model: {reason}")]
    ModelLoadFailed { reason: String },

    /// A compiled-in GPU backend could not be initialised.
    #[error("{device} device unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    /// The encoder failed on a specific text.
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<tokenizers::Error> for EmbeddingError {
    fn from(err: tokenizers::Error) -> Self {
        EmbeddingError::TokenizationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
