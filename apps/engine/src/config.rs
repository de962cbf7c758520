use anyhow::{Context, Result};
use std::str::FromStr;

use crate::scrape::cards::JOB_CARD_SELECTOR;

/// Browser-session knobs. Every fixed wait and step count of the scrape
/// pipeline lives here so callers tune readiness instead of editing code.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Selector that must be present before a listing page counts as ready.
    pub ready_selector: String,
    /// Upper bound on waiting for `ready_selector` after navigation.
    pub nav_timeout_secs: u64,
    /// Number of scroll-to-bottom steps used to trigger lazy loading.
    pub scroll_steps: u32,
    /// Upper bound per scroll step; each step returns early once new cards
    /// have rendered.
    pub scroll_delay_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            ready_selector: JOB_CARD_SELECTOR.to_string(),
            nav_timeout_secs: 15,
            scroll_steps: 10,
            scroll_delay_ms: 2000,
        }
    }
}

/// Engine configuration loaded from environment variables.
/// Every field has a default; a missing variable never fails startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub default_location: String,
    pub default_max_jobs: usize,
    /// Profile-extractor backend: "heuristic" today, a model-based backend
    /// can be selected here without touching callers.
    pub extractor_backend: String,
    pub rust_log: String,
    pub browser: BrowserConfig,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = BrowserConfig::default();
        Ok(EngineConfig {
            default_location: env_or("SEARCH_LOCATION", "India".to_string())?,
            default_max_jobs: env_or("SEARCH_MAX_JOBS", 20)?,
            extractor_backend: env_or("EXTRACTOR_BACKEND", "heuristic".to_string())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            browser: BrowserConfig {
                ready_selector: env_or("SCRAPE_READY_SELECTOR", defaults.ready_selector)?,
                nav_timeout_secs: env_or("SCRAPE_NAV_TIMEOUT_SECS", defaults.nav_timeout_secs)?,
                scroll_steps: env_or("SCRAPE_SCROLL_STEPS", defaults.scroll_steps)?,
                scroll_delay_ms: env_or("SCRAPE_SCROLL_DELAY_MS", defaults.scroll_delay_ms)?,
            },
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_location: "India".to_string(),
            default_max_jobs: 20,
            extractor_backend: "heuristic".to_string(),
            rust_log: "info".to_string(),
            browser: BrowserConfig::default(),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
