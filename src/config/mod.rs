//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SCREENER_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_EXCERPT_CHARS, DEFAULT_JUSTIFICATION_KEYWORDS, DEFAULT_MAX_SEQ_LEN,
};
use crate::embedding::SentenceConfig;
use crate::embedding::sentence::REQUIRED_MODEL_FILES;
use crate::ranking::{RankerConfig, default_concurrency};

/// Screener configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SCREENER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sentence-transformer directory. `None` selects the stub embedder.
    pub model_dir: Option<PathBuf>,

    /// Token limit per text. Default: `256`.
    pub max_seq_len: usize,

    /// Excerpt length in characters. Default: `300`.
    pub excerpt_chars: usize,

    /// Keywords listed per justification. Default: `5`.
    pub justification_keywords: usize,

    /// Resumes processed at once. Default: available parallelism.
    pub max_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            justification_keywords: DEFAULT_JUSTIFICATION_KEYWORDS,
            max_concurrency: default_concurrency(),
        }
    }
}

impl Config {
    const ENV_MODEL_DIR: &'static str = "SCREENER_MODEL_DIR";
    const ENV_MAX_SEQ_LEN: &'static str = "SCREENER_MAX_SEQ_LEN";
    const ENV_EXCERPT_CHARS: &'static str = "SCREENER_EXCERPT_CHARS";
    const ENV_JUSTIFICATION_KEYWORDS: &'static str = "SCREENER_JUSTIFICATION_KEYWORDS";
    const ENV_MAX_CONCURRENCY: &'static str = "SCREENER_MAX_CONCURRENCY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let max_seq_len = Self::parse_positive_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len)?;
        // Zero is allowed: excerpts become the marker alone.
        let excerpt_chars = Self::parse_usize_from_env(Self::ENV_EXCERPT_CHARS, defaults.excerpt_chars)?;
        let justification_keywords = Self::parse_positive_from_env(
            Self::ENV_JUSTIFICATION_KEYWORDS,
            defaults.justification_keywords,
        )?;
        let max_concurrency =
            Self::parse_positive_from_env(Self::ENV_MAX_CONCURRENCY, defaults.max_concurrency)?;

        Ok(Self {
            model_dir,
            max_seq_len,
            excerpt_chars,
            justification_keywords,
            max_concurrency,
        })
    }

    /// Validates the model directory (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
            if let Some(missing) = REQUIRED_MODEL_FILES
                .iter()
                .map(|file| path.join(file))
                .find(|file| !file.is_file())
            {
                return Err(ConfigError::MissingModelFile { path: missing });
            }
        }

        Ok(())
    }

    /// Embedder settings; stub mode when no model directory is set.
    pub fn embedder_config(&self) -> SentenceConfig {
        let config = match self.model_dir {
            Some(ref dir) => SentenceConfig::new(dir.clone()),
            None => SentenceConfig::stub(),
        };
        config.with_max_seq_len(self.max_seq_len)
    }

    pub fn ranker_config(&self) -> RankerConfig {
        RankerConfig {
            excerpt_chars: self.excerpt_chars,
            justification_keywords: self.justification_keywords,
            max_concurrency: self.max_concurrency,
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_positive_from_env(
        var_name: &'static str,
        default: usize,
    ) -> Result<usize, ConfigError> {
        let value = Self::parse_usize_from_env(var_name, default)?;
        if value == 0 {
            return Err(ConfigError::ZeroValue { name: var_name });
        }
        Ok(value)
    }
}
