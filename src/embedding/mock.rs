//! Mock embedder with injectable failures.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::EmbeddingError;
use super::stub::bag_of_words_embedding;
use super::types::{Embedder, Embedding};
use crate::constants::DEFAULT_EMBEDDING_DIM;

/// Embeds like the stub backend but fails for texts containing a marker.
#[derive(Debug)]
pub struct MockEmbedder {
    dim: usize,
    fail_marker: Option<String>,
    calls: AtomicUsize,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fail_marker: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes `embed` fail for any text containing `marker`.
    pub fn failing_on<S: Into<String>>(mut self, marker: S) -> Self {
        self.fail_marker = Some(marker.into());
        self
    }

    /// Number of `embed` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(marker) = &self.fail_marker
            && text.contains(marker.as_str())
        {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock inference failure".to_string(),
            });
        }

        Ok(bag_of_words_embedding(text, self.dim))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
