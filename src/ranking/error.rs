use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::extraction::ExtractionError;
use crate::scoring::ScoringError;

/// Why a single document could not be scored.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The document's bytes could not be read from their source.
    #[error("document could not be read: {reason}")]
    Unreadable { reason: String },

    /// The worker processing the document panicked or was cancelled.
    #[error("processing task failed: {reason}")]
    TaskFailed { reason: String },
}

impl From<EmbeddingError> for DocumentError {
    fn from(err: EmbeddingError) -> Self {
        DocumentError::Scoring(ScoringError::Embedding(err))
    }
}

impl DocumentError {
    /// Classifies the failure for presentation.
    pub fn kind(&self) -> FailureKind {
        match self {
            DocumentError::Extraction(ExtractionError::UnsupportedFormat { .. }) => {
                FailureKind::UnsupportedFormat
            }
            DocumentError::Extraction(ExtractionError::InvalidEncoding { .. }) => {
                FailureKind::InvalidEncoding
            }
            DocumentError::Extraction(ExtractionError::ExtractionFailure { .. })
            | DocumentError::Unreadable { .. }
            | DocumentError::TaskFailed { .. } => FailureKind::ExtractionFailure,
            DocumentError::Scoring(_) => FailureKind::EmbeddingFailure,
        }
    }
}

/// Failure taxonomy surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    UnsupportedFormat,
    InvalidEncoding,
    ExtractionFailure,
    EmbeddingFailure,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::UnsupportedFormat => "unsupported_format",
            FailureKind::InvalidEncoding => "invalid_encoding",
            FailureKind::ExtractionFailure => "extraction_failure",
            FailureKind::EmbeddingFailure => "embedding_failure",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a whole ranking run.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("at least one resume is required")]
    NoResumes,

    /// The job description could not be extracted or embedded.
    #[error("job description '{name}' could not be processed: {source}")]
    JobFailed {
        name: String,
        #[source]
        source: DocumentError,
    },

    #[error("invalid ranker configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type RankingResult<T> = Result<T, RankingError>;
