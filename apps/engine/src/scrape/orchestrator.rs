//! Composes the scrape pipeline: query → browser session → card extraction →
//! categorization. One browser session per call, never shared, released when
//! the call ends on any path.

use std::time::Duration;

use tracing::{error, info};

use crate::config::EngineConfig;
use crate::errors::ScrapeError;
use crate::models::CategorizedJobs;
use crate::scrape::browser::{ChromeProvider, PageContentProvider};
use crate::scrape::cards::JobCardExtractor;
use crate::scrape::categorize::categorize;
use crate::scrape::query;

/// Optional contact-detection step. The card extractor never fills
/// `hr_email`; a hook supplied here may.
pub type ContactHook =
    dyn Fn(&crate::models::JobListing) -> Option<String> + Send + Sync;

pub struct ScrapeOrchestrator {
    config: EngineConfig,
    cards: JobCardExtractor,
    contact_hook: Option<Box<ContactHook>>,
}

impl ScrapeOrchestrator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cards: JobCardExtractor::new(),
            contact_hook: None,
        }
    }

    pub fn with_contact_hook(mut self, hook: Box<ContactHook>) -> Self {
        self.contact_hook = Some(hook);
        self
    }

    /// Runs one search against a freshly launched browser session. Fatal
    /// conditions (`Launch`, `NavigationTimeout`) propagate typed; the
    /// session is released either way.
    pub fn search(
        &self,
        skills: &[String],
        location: &str,
        experience_years: Option<u32>,
        max_jobs: usize,
    ) -> Result<CategorizedJobs, ScrapeError> {
        let provider = ChromeProvider::open(&self.config.browser)?;
        self.search_with(provider, skills, location, experience_years, max_jobs)
    }

    /// Same pipeline over any `PageContentProvider`. Lets tests (and
    /// alternative engines) run without Chrome.
    pub fn search_with<P: PageContentProvider>(
        &self,
        mut provider: P,
        skills: &[String],
        location: &str,
        experience_years: Option<u32>,
        max_jobs: usize,
    ) -> Result<CategorizedJobs, ScrapeError> {
        let query = query::build(skills, location, experience_years);
        let url = query.url();
        info!(%url, max_jobs, "starting job search");

        provider.navigate(&url)?;
        provider.paginate(
            self.config.browser.scroll_steps,
            Duration::from_millis(self.config.browser.scroll_delay_ms),
        );
        let content = provider.snapshot()?;

        let mut jobs = self.cards.extract(&content, max_jobs, location, query.level);
        if let Some(hook) = &self.contact_hook {
            for job in &mut jobs {
                if job.hr_email.is_none() {
                    job.hr_email = hook(job);
                }
            }
        }

        info!(scraped = jobs.len(), "job search complete");
        Ok(categorize(jobs))
    }

    /// Presentation policy for fatal errors: log and hand back an empty
    /// partition instead of surfacing the failure. No automatic retry.
    pub fn search_or_empty(
        &self,
        skills: &[String],
        location: &str,
        experience_years: Option<u32>,
        max_jobs: usize,
    ) -> CategorizedJobs {
        present_or_empty(self.search(skills, location, experience_years, max_jobs))
    }
}

/// Maps a fatal scrape failure to an empty partition, logging it once.
fn present_or_empty(result: Result<CategorizedJobs, ScrapeError>) -> CategorizedJobs {
    match result {
        Ok(categorized) => categorized,
        Err(e) => {
            error!("job search aborted: {e}");
            CategorizedJobs::default()
        }
    }
}
