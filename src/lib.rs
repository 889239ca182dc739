//! Resume screener library crate (used by the `screener` binary and integration tests).
//!
//! # Public API Surface
//!
//! One job description is compared against a batch of resumes. Each resume
//! gets a semantic similarity score, a text excerpt and a keyword-overlap
//! justification. The exports are organized by module:
//!
//! ## Pipeline
//! - [`Document`], [`DocumentFormat`] - Named raw bytes (plain, PDF, Word)
//! - [`TextExtractor`], [`ExtractedText`] - Text extraction
//! - [`KeywordExtractor`], [`KeywordSet`] - Keyword sets and justifications
//! - [`SimilarityScorer`] - Cosine similarity over embeddings
//! - [`MatchRanker`], [`RankedReport`] - Ranking with per-resume failure isolation
//!
//! ## Embedding
//! - [`Embedder`] - Trait implemented by embedding backends
//! - [`SentenceEmbedder`], [`SentenceConfig`] - BERT sentence embeddings via candle
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `SCREENER_*` environment settings
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod extraction;
pub mod keywords;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{NO_MATCH_MESSAGE, STOP_WORDS, TRUNCATION_MARKER};
pub use document::{Document, DocumentFormat};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    Embedder, Embedding, EmbeddingError, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN,
    SentenceConfig, SentenceEmbedder,
};
pub use extraction::{ExtractedText, ExtractionError, TextExtractor};
pub use keywords::{KeywordExtractor, KeywordSet, extract_keywords};
pub use ranking::{
    DocumentError, FailureKind, MatchFailure, MatchRanker, MatchResult, ProcessedJob,
    RankedEntry, RankedReport, RankerConfig, RankingError, RankingResult, ReportRecord,
    ResumeInput, UnreadableResume,
};
pub use scoring::{ScoringError, SimilarityScorer, cosine_similarity, similarity_percent};
