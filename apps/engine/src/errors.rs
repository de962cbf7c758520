use thiserror::Error;

/// Fatal failures of the scrape pipeline.
///
/// Card-level parse failures are not represented here: a malformed card is
/// absorbed inside `JobCardExtractor` and never reaches the caller.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("browser engine failed to start: {0}")]
    Launch(String),

    #[error("page never became ready: {0}")]
    NavigationTimeout(String),
}

/// Fatal failures of the resume pipeline.
///
/// A field that cannot be found is a normal absent value, not an error.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("failed to read document: {0}")]
    DocumentRead(#[from] pdf_extract::OutputError),
}
