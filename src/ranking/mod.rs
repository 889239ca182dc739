//! Ranking of resumes against a job description.
//!
//! [`MatchRanker`] processes the job once, then scores every resume against
//! the shared job embedding and keyword set. Each resume yields either a
//! [`MatchResult`] or a [`MatchFailure`]; one bad resume never aborts the run,
//! while a job description that cannot be processed does.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use screener::document::Document;
//! use screener::embedding::SentenceEmbedder;
//! use screener::ranking::MatchRanker;
//!
//! let embedder = Arc::new(SentenceEmbedder::stub().unwrap());
//! let ranker = MatchRanker::with_default_config(embedder);
//!
//! let job = Document::from_text("job.txt", "Rust developer, async networking");
//! let resumes = vec![
//!     Document::from_text("a.txt", "Rust developer with tokio and async networking"),
//!     Document::from_text("b.txt", "Pastry chef"),
//! ];
//!
//! let report = ranker.rank(&job, &resumes).unwrap();
//! assert_eq!(report.best().unwrap().resume_name, "a.txt");
//! ```

pub mod config;
pub mod error;
pub mod ranker;
pub mod types;


pub use config::{RankerConfig, default_concurrency};
pub use error::{DocumentError, FailureKind, RankingError, RankingResult};
pub use ranker::{MatchRanker, ProcessedJob};
pub use types::{
    MatchFailure, MatchResult, RankedEntry, RankedReport, ReportRecord, ResumeInput,
    UnreadableResume,
};
