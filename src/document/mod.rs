//! Uploaded documents (job descriptions and resumes).
//!
//! A [`Document`] is immutable and lives for a single scoring pass. Its format
//! is either declared by the caller or inferred from the name suffix.

mod format;


pub use format::DocumentFormat;

use std::sync::Arc;

use crate::extraction::ExtractionError;

/// A named unit of raw bytes awaiting extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    raw_bytes: Arc<[u8]>,
    declared_format: Option<String>,
}

impl Document {
    /// Creates a document whose format is inferred from `name`.
    pub fn new<N: Into<String>, B: Into<Arc<[u8]>>>(name: N, raw_bytes: B) -> Self {
        Self {
            name: name.into(),
            raw_bytes: raw_bytes.into(),
            declared_format: None,
        }
    }

    /// Creates a document with an explicitly declared format (e.g. `"pdf"`).
    ///
    /// The declaration is checked at extraction time, so an unsupported value
    /// fails only this document.
    pub fn with_declared_format<N, B, F>(name: N, raw_bytes: B, format: F) -> Self
    where
        N: Into<String>,
        B: Into<Arc<[u8]>>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            raw_bytes: raw_bytes.into(),
            declared_format: Some(format.into()),
        }
    }

    /// Convenience constructor for in-memory text.
    pub fn from_text<N: Into<String>>(name: N, text: &str) -> Self {
        Self::new(name, text.as_bytes())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn declared_format(&self) -> Option<&str> {
        self.declared_format.as_deref()
    }

    /// Resolves the effective format: the declared one if present, else the
    /// one inferred from the name.
    pub fn format(&self) -> Result<DocumentFormat, ExtractionError> {
        match &self.declared_format {
            Some(declared) => declared.parse(),
            None => Ok(DocumentFormat::infer_from_name(&self.name)),
        }
    }
}
