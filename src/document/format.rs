use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::extraction::ExtractionError;

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// UTF-8 text.
    Plain,
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word-processing document.
    Docx,
}

impl DocumentFormat {
    /// Infers the format from a file name: `.pdf` and `.docx` are recognised,
    /// anything else is treated as plain text.
    ///
    /// The suffix match is case-sensitive.
    pub fn infer_from_name(name: &str) -> Self {
        if name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if name.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Plain => "plain",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractionError;

    /// Parses a declared format. Accepts the canonical names plus the common
    /// extension spellings (`txt`, `text`, leading dot optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "plain" | "txt" | "text" => Ok(DocumentFormat::Plain),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractionError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}
