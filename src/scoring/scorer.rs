use std::sync::Arc;

use tracing::debug;

use crate::embedding::{Embedder, Embedding};

use super::error::ScoringError;

/// Cosine similarity `dot(a, b) / (|a| * |b|)`.
///
/// Returns `0.0` when either vector has zero norm or the lengths differ, so
/// degenerate inputs (e.g. empty text) score as unrelated instead of `NaN`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

/// Converts a similarity to a percentage rounded to 2 decimal places.
///
/// The similarity is clamped to `[0, 1]` first, so the result is in `[0, 100]`.
pub fn similarity_percent(similarity: f32) -> f64 {
    let clamped = f64::from(similarity.clamp(0.0, 1.0));
    (clamped * 100.0 * 100.0).round() / 100.0
}

/// Embedding-based similarity scorer.
///
/// Cloning is cheap: the embedder is shared through an `Arc`.
pub struct SimilarityScorer<E: Embedder> {
    embedder: Arc<E>,
}

impl<E: Embedder> Clone for SimilarityScorer<E> {
    fn clone(&self) -> Self {
        Self {
            embedder: Arc::clone(&self.embedder),
        }
    }
}

impl<E: Embedder> std::fmt::Debug for SimilarityScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("embedding_dim", &self.embedder.embedding_dim())
            .finish_non_exhaustive()
    }
}

impl<E: Embedder> SimilarityScorer<E> {
    pub fn new(embedder: Arc<E>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &Arc<E> {
        &self.embedder
    }

    /// Embeds `text`, checking the output dimension.
    pub fn embed(&self, text: &str) -> Result<Embedding, ScoringError> {
        let embedding = self.embedder.embed(text)?;

        let expected = self.embedder.embedding_dim();
        if embedding.dim() != expected {
            return Err(ScoringError::DimensionMismatch {
                expected,
                actual: embedding.dim(),
            });
        }

        Ok(embedding)
    }

    /// Similarity of two texts; each is embedded independently.
    pub fn similarity(&self, job_text: &str, resume_text: &str) -> Result<f32, ScoringError> {
        let job_embedding = self.embed(job_text)?;
        self.score_against(&job_embedding, resume_text)
    }

    /// Similarity of `resume_text` to an already-computed job embedding.
    pub fn score_against(
        &self,
        job_embedding: &Embedding,
        resume_text: &str,
    ) -> Result<f32, ScoringError> {
        let resume_embedding = self.embed(resume_text)?;
        self.compare(job_embedding, &resume_embedding)
    }

    /// Cosine similarity of two embeddings of the same dimension.
    pub fn compare(&self, a: &Embedding, b: &Embedding) -> Result<f32, ScoringError> {
        if a.dim() != b.dim() {
            return Err(ScoringError::DimensionMismatch {
                expected: a.dim(),
                actual: b.dim(),
            });
        }

        let similarity = cosine_similarity(a.as_slice(), b.as_slice());
        debug!(similarity, "Computed cosine similarity");
        Ok(similarity)
    }
}
