//! Text extraction from uploaded bytes (plain text, PDF, Word).
//!
//! Extraction is a pure, offline transform: the same `(bytes, format)` pair
//! always yields the same text. Empty input yields empty text for every format.

mod docx;
mod error;
mod panic;
mod pdf;


pub use error::ExtractionError;
pub use panic::install_panic_logger;

use std::fmt;

use tracing::debug;

use crate::constants::TRUNCATION_MARKER;
use crate::document::{Document, DocumentFormat};

/// Text derived from a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// First `max_chars` characters followed by the truncation marker.
    ///
    /// The marker is appended even when the text is shorter than `max_chars`.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut excerpt: String = self.0.chars().take(max_chars).collect();
        excerpt.push_str(TRUNCATION_MARKER);
        excerpt
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Converts documents to text according to their format.
///
/// Parser panics are caught per document. They still reach the process
/// panic hook; see [`install_panic_logger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the text of `document`.
    pub fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let format = document.format()?;
        let text = self.extract_bytes(document.raw_bytes(), format)?;

        debug!(
            document = document.name(),
            %format,
            bytes = document.raw_bytes().len(),
            chars = text.char_len(),
            "Document text extracted"
        );

        Ok(text)
    }

    /// Extracts text from raw bytes of a known format.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        if bytes.is_empty() {
            return Ok(ExtractedText::default());
        }

        let text = match format {
            DocumentFormat::Plain => String::from_utf8(bytes.to_vec())?,
            DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
            DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
        };

        Ok(ExtractedText(text))
    }
}
