//! Pluggable profile extraction — swap backends without touching callers.
//!
//! Default: `HeuristicProfileExtractor` (pure-Rust regex/keyword rules, fast,
//! deterministic, fully testable). A model-based backend implementing the
//! same trait can be selected via `EXTRACTOR_BACKEND` and must produce the
//! same `ResumeProfile` shape from the same raw text.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::ResumeError;
use crate::models::ResumeProfile;
use crate::resume::fields::FieldExtractor;

/// The profile extractor seam. Carried as `Arc<dyn ProfileExtractor>`.
#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    async fn extract(&self, raw_text: &str) -> Result<ResumeProfile, ResumeError>;

    /// Which backend produced a profile — for transparency downstream.
    fn backend(&self) -> &'static str;
}

/// Regex/keyword-based extraction; never fails, absent fields are values.
pub struct HeuristicProfileExtractor {
    fields: FieldExtractor,
}

impl HeuristicProfileExtractor {
    pub fn new() -> Self {
        Self {
            fields: FieldExtractor::new(),
        }
    }
}

impl Default for HeuristicProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileExtractor for HeuristicProfileExtractor {
    async fn extract(&self, raw_text: &str) -> Result<ResumeProfile, ResumeError> {
        Ok(self.fields.extract_profile(raw_text))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Builds the extractor named by `backend`. Unknown names fall back to the
/// heuristic backend rather than failing startup.
pub fn build_extractor(backend: &str) -> Arc<dyn ProfileExtractor> {
    match backend {
        "heuristic" => Arc::new(HeuristicProfileExtractor::new()),
        other => {
            warn!("unknown extractor backend '{other}', using heuristic");
            Arc::new(HeuristicProfileExtractor::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn heuristic_backend_extracts_through_the_trait() {
        let extractor: Arc<dyn ProfileExtractor> = build_extractor("heuristic");
        let profile = extractor
            .extract("Jane Doe\njane@doe.com\nPython and Docker\n")
            .await
            .unwrap();

        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@doe.com"));
        assert_eq!(extractor.backend(), "heuristic");
    }

    #[tokio::test]
    async fn unknown_backend_falls_back_to_heuristic() {
        let extractor = build_extractor("quantum");
        assert_eq!(extractor.backend(), "heuristic");
    }
}
