//! PDF bytes → page-ordered plain text.

use crate::errors::ResumeError;

/// Concatenates the text of every page in document order. Pages with no
/// extractable text contribute nothing; there is no OCR pass. Unreadable
/// bytes fail with `DocumentRead`.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ResumeError> {
    let text = pdf_extract::extract_text_from_mem(pdf_bytes)?;
    Ok(text)
}
