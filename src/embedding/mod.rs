//! Embedding model + utilities.
//!
//! - [`Embedder`] is the seam the scorer and ranker are generic over.
//! - [`sentence`] provides the BERT-based [`SentenceEmbedder`] (with stub mode).

/// BERT encoder wrapper used by the sentence embedder.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Mean pooling over token states.
pub mod pool;
/// Sentence embedder.
pub mod sentence;
mod stub;
mod types;
/// Tokenizer loading helpers.
pub mod utils;


pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig, SentenceEmbedder};
pub use types::{Embedder, Embedding};
