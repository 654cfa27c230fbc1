//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::TextError;

/// Extract embedded text from a PDF file.
///
/// The document is probed with lopdf first (page count, encryption) so that
/// empty-password-encrypted PDFs can still be fed to `pdf-extract`, which
/// cannot decrypt on its own.
pub fn extract_pdf_text(path: &Path) -> Result<String, TextError> {
    let data = fs::read(path).map_err(|e| TextError::Read(e.to_string()))?;

    let mut doc = Document::load_mem(&data).map_err(|e| TextError::Pdf(e.to_string()))?;

    let data = if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(TextError::Encrypted);
        }
        debug!("decrypted PDF with empty password");
        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| TextError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
        decrypted
    } else {
        data
    };

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(TextError::Pdf("PDF has no pages".to_string()));
    }
    debug!("loaded PDF with {} pages", page_count);

    pdf_extract::extract_text_from_mem(&data).map_err(|e| TextError::Pdf(e.to_string()))
}
