use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, read_docx};
use tracing::debug;

use crate::document::DocumentFormat;

use super::error::ExtractionError;
use super::panic::catch_parser_panic;

/// Extracts body paragraphs in document order, joined with `\n`.
///
/// Tables, images and other non-paragraph children are skipped. Empty
/// paragraphs are kept so blank lines survive.
pub(crate) fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = match catch_parser_panic(|| read_docx(bytes)) {
        Ok(Ok(docx)) => docx,
        Ok(Err(e)) => {
            return Err(ExtractionError::ExtractionFailure {
                format: DocumentFormat::Docx,
                reason: format!("{:?}", e),
            });
        }
        Err(_) => {
            return Err(ExtractionError::ExtractionFailure {
                format: DocumentFormat::Docx,
                reason: "Word parser aborted on malformed input".to_string(),
            });
        }
    };

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    debug!(paragraphs = paragraphs.len(), "Word text extracted");

    Ok(paragraphs.join("\n"))
}

/// Text of one paragraph, including hyperlink and tracked-insertion runs.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Tabs become `\t`; every break becomes `\n`.
fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
