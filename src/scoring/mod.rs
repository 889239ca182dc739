//! Semantic similarity between job and resume texts.
//!
//! The scorer embeds each text once and compares vectors with cosine
//! similarity. When one job is compared against many resumes, embed the job
//! with [`SimilarityScorer::embed`] and reuse it through
//! [`SimilarityScorer::score_against`].

pub mod error;
pub mod scorer;


pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity, similarity_percent};
