//! Document fixtures.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use screener::document::Document;

pub const PYTHON_JOB: &str = "Looking for a Python developer with 5 years experience";
pub const PYTHON_RESUME: &str = "Senior Python Developer with 6 years experience";
pub const DESIGNER_RESUME: &str = "Graphic designer with Adobe skills";

/// Packs `paragraphs` into an in-memory `.docx`.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .expect("failed to pack docx fixture");
    cursor.into_inner()
}

pub fn docx_document(name: &str, paragraphs: &[&str]) -> Document {
    Document::new(name, docx_bytes(paragraphs))
}

pub fn python_job() -> Document {
    Document::from_text("job.txt", PYTHON_JOB)
}

/// Builds an ordered resume batch from `(name, text)` pairs.
pub struct ResumeBatch {
    documents: Vec<Document>,
}

impl ResumeBatch {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, text: &str) -> Self {
        self.documents.push(Document::from_text(name, text));
        self
    }

    pub fn bytes(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.documents.push(Document::new(name, bytes));
        self
    }

    pub fn document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    pub fn build(self) -> Vec<Document> {
        self.documents
    }
}

impl Default for ResumeBatch {
    fn default() -> Self {
        Self::new()
    }
}
