//! Headless-browser session behind a capability trait, so extraction logic
//! never touches the underlying engine directly.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};
use tracing::{debug, warn};

use crate::config::BrowserConfig;
use crate::errors::ScrapeError;

const VIEWPORT: (u32, u32) = (1920, 1080);
const SCROLL_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Rendered-page access used by the scrape orchestrator. Implementations own
/// a session; swapping the browser engine means swapping this impl only.
pub trait PageContentProvider {
    /// Loads `url` and blocks until content is present or the bounded wait
    /// elapses.
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError>;

    /// Scrolls to the bottom `steps` times to force lazy-loaded content to
    /// render. Each step waits up to `delay_per_step`, returning early once
    /// new content appears. Scroll failures end pagination but keep whatever
    /// already rendered.
    fn paginate(&mut self, steps: u32, delay_per_step: Duration);

    /// Current rendered content, for parsing.
    fn snapshot(&self) -> Result<String, ScrapeError>;
}

/// Chrome-backed session. The browser process is owned exclusively by this
/// provider and killed when it drops, on every exit path.
pub struct ChromeProvider {
    _browser: Browser,
    tab: Arc<Tab>,
    ready_selector: String,
    nav_timeout: Duration,
}

impl ChromeProvider {
    /// Launches a headless, fixed-viewport, no-sandbox Chrome instance.
    pub fn open(config: &BrowserConfig) -> Result<Self, ScrapeError> {
        let options = LaunchOptionsBuilder::default()
            .headless(true)
            .sandbox(false)
            .window_size(Some(VIEWPORT))
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ScrapeError::Launch(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        Ok(Self {
            _browser: browser,
            tab,
            ready_selector: config.ready_selector.clone(),
            nav_timeout: Duration::from_secs(config.nav_timeout_secs),
        })
    }

    /// How many ready-marker elements the page currently shows.
    fn rendered_count(&self) -> Option<u64> {
        let expression = format!(
            "document.querySelectorAll('{}').length",
            self.ready_selector
        );
        let result = self.tab.evaluate(&expression, false).ok()?;
        result.value.and_then(|v| v.as_u64())
    }
}

impl PageContentProvider for ChromeProvider {
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScrapeError::NavigationTimeout(e.to_string()))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| ScrapeError::NavigationTimeout(e.to_string()))?;
        // Readiness is verified, not assumed: the page counts as loaded only
        // once the first card is in the DOM.
        self.tab
            .wait_for_element_with_custom_timeout(&self.ready_selector, self.nav_timeout)
            .map_err(|e| ScrapeError::NavigationTimeout(e.to_string()))?;
        Ok(())
    }

    fn paginate(&mut self, steps: u32, delay_per_step: Duration) {
        let mut seen = self.rendered_count().unwrap_or(0);

        for step in 0..steps {
            let scrolled = self
                .tab
                .evaluate("window.scrollTo(0, document.body.scrollHeight)", false);
            if let Err(e) = scrolled {
                warn!(step, "scroll failed, keeping content loaded so far: {e}");
                return;
            }

            // Bounded wait for the card count to grow; no blind full-length
            // sleeps.
            let deadline = Instant::now() + delay_per_step;
            while Instant::now() < deadline {
                std::thread::sleep(SCROLL_POLL_INTERVAL);
                let current = self.rendered_count().unwrap_or(seen);
                if current > seen {
                    seen = current;
                    break;
                }
            }
            debug!(step, rendered = seen, "scroll step complete");
        }
    }

    fn snapshot(&self) -> Result<String, ScrapeError> {
        // A tab that can no longer serve its content never became ready in
        // any useful sense; keep the failure in that bucket.
        self.tab
            .get_content()
            .map_err(|e| ScrapeError::NavigationTimeout(format!("rendered content unavailable: {e}")))
    }
}
