//! File text extraction module.
//!
//! [`extract_text`] is a never-fails facade: every I/O and decoding failure
//! degrades to an empty string, with the chosen fallback logged so operators
//! can see which path was taken.

mod pdf;

pub use pdf::extract_pdf_text;

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Extract best-effort raw text from a file.
///
/// Dispatches on the lowercased file extension. PDF decoding is delegated to
/// `pdf-extract`; Word documents are read as raw bytes (no binary parser in
/// this path); everything else is attempted as plain text. Returns an empty
/// string on any failure.
pub fn extract_text(path: &Path) -> String {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            warn!("cannot stat {}: {}", path.display(), e);
            return String::new();
        }
    };
    if meta.len() == 0 {
        warn!("file is empty: {}", path.display());
        return String::new();
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => match extract_pdf_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "PDF extraction failed for {}: {}, falling back to raw read",
                    path.display(),
                    e
                );
                read_lossy(path)
            }
        },
        "doc" | "docx" => {
            // No binary Word parser in the deterministic path; the raw read
            // yields usable text only for the simplest documents.
            warn!(
                "reading Word document {} as raw bytes, text quality will be poor",
                path.display()
            );
            read_lossy(path)
        }
        "txt" | "md" | "rtf" => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("non-UTF-8 text file {}: {}", path.display(), e);
                read_lossy(path)
            }
        },
        other => {
            debug!(
                "unknown extension {:?} for {}, attempting plain text read",
                other,
                path.display()
            );
            read_lossy(path)
        }
    }
}

/// Read file bytes as lossy UTF-8, degrading to an empty string.
fn read_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_text_missing_file() {
        assert_eq!(extract_text(Path::new("/nonexistent/resume.txt")), "");
    }

    #[test]
    fn test_extract_text_empty_file() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert_eq!(extract_text(file.path()), "");
    }

    #[test]
    fn test_extract_text_plain() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Jane Doe\njane@example.com").unwrap();
        let text = extract_text(file.path());
        assert!(text.contains("jane@example.com"));
    }

    #[test]
    fn test_extract_text_unknown_extension_reads_raw() {
        let mut file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
        write!(file, "some text content").unwrap();
        assert_eq!(extract_text(file.path()), "some text content");
    }

    #[test]
    fn test_extract_text_docx_degrades_to_raw_read() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"PK\x03\x04 not a real archive").unwrap();
        // Raw read never fails, even on binary garbage.
        let text = extract_text(file.path());
        assert!(text.starts_with("PK"));
    }

    #[test]
    fn test_extract_text_corrupt_pdf_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write!(file, "not a pdf at all").unwrap();
        // Falls back to the raw read rather than failing.
        assert_eq!(extract_text(file.path()), "not a pdf at all");
    }
}
