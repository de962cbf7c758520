//! The scrape pipeline: query construction, browser session, card parsing,
//! and categorization.

pub mod browser;
pub mod cards;
pub mod categorize;
pub mod contact;
pub mod orchestrator;
pub mod query;

pub use browser::{ChromeProvider, PageContentProvider};
pub use cards::JobCardExtractor;
pub use categorize::categorize;
pub use contact::ContactDetector;
pub use orchestrator::ScrapeOrchestrator;
pub use query::SearchQuery;
