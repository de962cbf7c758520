//! Job-search extraction engine: two independent pipelines behind one crate.
//!
//! The scrape pipeline drives a headless browser over a dynamically rendered
//! listing page and turns its cards into categorized `JobListing`s. The
//! resume pipeline turns uploaded PDF bytes into a `ResumeProfile` via
//! heuristic field extraction. Persistence, auth, and HTTP routing are
//! external collaborators.

pub mod config;
pub mod errors;
pub mod models;
pub mod resume;
pub mod scrape;

pub use config::{BrowserConfig, EngineConfig};
pub use errors::{ResumeError, ScrapeError};
pub use models::{CategorizedJobs, ExperienceLevel, JobListing, ResumeProfile};
pub use resume::{parse_resume, ProfileExtractor};
pub use scrape::ScrapeOrchestrator;
