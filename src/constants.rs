//! Cross-cutting, shared constants.
//!
//! The presentation limits (excerpt length, keyword count) are defaults; the
//! ranker reads its effective values from [`RankerConfig`](crate::ranking::RankerConfig).

/// Output dimension of all-MiniLM-L6-v2 (and of the stub embedder).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the encoder; longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Number of leading resume characters shown as the excerpt.
pub const DEFAULT_EXCERPT_CHARS: usize = 300;

/// Number of matched keywords listed in a justification.
pub const DEFAULT_JUSTIFICATION_KEYWORDS: usize = 5;

/// Appended to every excerpt and every non-empty justification.
pub const TRUNCATION_MARKER: &str = "...";

/// Separator between keywords in a justification.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// Justification used when job and resume share no keywords.
pub const NO_MATCH_MESSAGE: &str = "No strong keyword matches.";

/// Tokens must be strictly longer than this (in characters) to count as keywords.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 2;

/// Common words excluded from keyword analysis.
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "in", "of", "with", "to", "for", "on", "at", "as", "is", "are",
    "we", "you", "they", "this",
];
