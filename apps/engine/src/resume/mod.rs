//! The resume pipeline: PDF text extraction and structured field derivation.

pub mod extractor;
pub mod fields;
pub mod text;

pub use extractor::{build_extractor, HeuristicProfileExtractor, ProfileExtractor};
pub use fields::FieldExtractor;

use crate::errors::ResumeError;
use crate::models::ResumeProfile;

/// Full pipeline for one document: bytes → text → profile. Holds no resource
/// beyond the scope of this call.
pub async fn parse_resume(
    pdf_bytes: &[u8],
    extractor: &dyn ProfileExtractor,
) -> Result<ResumeProfile, ResumeError> {
    let raw_text = text::extract_text(pdf_bytes)?;
    extractor.extract(&raw_text).await
}
