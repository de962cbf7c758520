//! Per-card DOM parsing of a rendered listing page.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::{ExperienceLevel, JobListing};

/// Selector for one job card; also the readiness marker the browser session
/// waits on after navigation.
pub const JOB_CARD_SELECTOR: &str = "div.base-card";

const TITLE_SELECTOR: &str = "h3.base-search-card__title";
const COMPANY_SELECTOR: &str = "h4.base-search-card__subtitle";
const LOCATION_SELECTOR: &str = "span.job-search-card__location";
const LINK_SELECTOR: &str = "a.base-card__full-link";

pub struct JobCardExtractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
}

impl JobCardExtractor {
    pub fn new() -> Self {
        // Static selectors; parse failures here are programmer errors.
        Self {
            card: Selector::parse(JOB_CARD_SELECTOR).unwrap(),
            title: Selector::parse(TITLE_SELECTOR).unwrap(),
            company: Selector::parse(COMPANY_SELECTOR).unwrap(),
            location: Selector::parse(LOCATION_SELECTOR).unwrap(),
            link: Selector::parse(LINK_SELECTOR).unwrap(),
        }
    }

    /// Walks cards in document order and collects up to `cap` valid listings.
    ///
    /// A card missing its location falls back to `fallback_location` (the
    /// originally requested one). A card missing title, company, or link is
    /// skipped; one malformed card never aborts the batch.
    pub fn extract(
        &self,
        page_content: &str,
        cap: usize,
        fallback_location: &str,
        level: Option<ExperienceLevel>,
    ) -> Vec<JobListing> {
        let document = Html::parse_document(page_content);
        let mut listings = Vec::new();

        for card in document.select(&self.card) {
            if listings.len() >= cap {
                break;
            }
            match self.parse_card(&card, fallback_location, level) {
                Some(listing) => listings.push(listing),
                None => debug!("skipping malformed job card"),
            }
        }

        listings
    }

    fn parse_card(
        &self,
        card: &ElementRef<'_>,
        fallback_location: &str,
        level: Option<ExperienceLevel>,
    ) -> Option<JobListing> {
        let title = text_of(card, &self.title)?;
        let company = text_of(card, &self.company)?;
        let location =
            text_of(card, &self.location).unwrap_or_else(|| fallback_location.to_string());

        let apply_link = card
            .select(&self.link)
            .next()?
            .value()
            .attr("href")?
            .trim()
            .to_string();
        if !apply_link.starts_with("http") {
            return None; // apply links must be absolute
        }

        Some(JobListing {
            title,
            company,
            location,
            apply_link,
            hr_email: None, // filled by the contact-detection hook, if any
            experience_level: level,
        })
    }
}

impl Default for JobCardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First matching element's text, trimmed; `None` when missing or empty.
fn text_of(card: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    let text = card
        .select(selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
