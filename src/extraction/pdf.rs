use tracing::debug;

use crate::document::DocumentFormat;

use super::error::ExtractionError;
use super::panic::catch_parser_panic;

/// Extracts the text of every page, in document order.
///
/// Pages are joined with `\n` so words at a page boundary stay separate. The
/// parser can panic on some malformed inputs; that is reported as an
/// extraction failure for this document only.
pub(crate) fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    match catch_parser_panic(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => {
            let text = pages.join("\n");
            debug!(
                bytes = bytes.len(),
                pages = pages.len(),
                chars = text.len(),
                "PDF text extracted"
            );
            Ok(text)
        }
        Ok(Err(e)) => Err(ExtractionError::ExtractionFailure {
            format: DocumentFormat::Pdf,
            reason: e.to_string(),
        }),
        Err(_) => Err(ExtractionError::ExtractionFailure {
            format: DocumentFormat::Pdf,
            reason: "PDF parser aborted on malformed input".to_string(),
        }),
    }
}
