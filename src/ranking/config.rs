use crate::constants::{DEFAULT_EXCERPT_CHARS, DEFAULT_JUSTIFICATION_KEYWORDS};

use super::error::RankingError;

/// Presentation limits and worker bounds for [`MatchRanker`](super::MatchRanker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Leading resume characters kept in each excerpt.
    pub excerpt_chars: usize,
    /// Matched keywords listed in each justification.
    pub justification_keywords: usize,
    /// Max resumes processed at once by [`rank_concurrent`](super::MatchRanker::rank_concurrent).
    pub max_concurrency: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            justification_keywords: DEFAULT_JUSTIFICATION_KEYWORDS,
            max_concurrency: default_concurrency(),
        }
    }
}

impl RankerConfig {
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    pub fn with_justification_keywords(mut self, justification_keywords: usize) -> Self {
        self.justification_keywords = justification_keywords;
        self
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        if self.max_concurrency == 0 {
            return Err(RankingError::InvalidConfig {
                reason: "max_concurrency must be greater than zero".to_string(),
            });
        }
        if self.justification_keywords == 0 {
            return Err(RankingError::InvalidConfig {
                reason: "justification_keywords must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Available CPU parallelism (1 if unknown).
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
