use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobfinder_engine::config::EngineConfig;
use jobfinder_engine::resume::{build_extractor, parse_resume};
use jobfinder_engine::scrape::ScrapeOrchestrator;

/// Thin driver around the two pipelines. API routing, auth, and persistence
/// live elsewhere; this binary exists to run one pipeline from a shell.
#[tokio::main]
async fn main() -> Result<()> {
    let config = EngineConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("jobfinder engine v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        Some((cmd, rest)) if cmd == "search" => run_search(&config, rest),
        Some((cmd, rest)) if cmd == "resume" => run_resume(&config, rest).await,
        _ => bail!(
            "usage: jobfinder-engine search <skill>... | jobfinder-engine resume <file.pdf>"
        ),
    }
}

fn run_search(config: &EngineConfig, skills: &[String]) -> Result<()> {
    if skills.is_empty() {
        bail!("search needs at least one skill");
    }
    let location = config.default_location.clone();
    let max_jobs = config.default_max_jobs;
    let experience_years = std::env::var("SEARCH_EXPERIENCE_YEARS")
        .ok()
        .map(|v| v.parse::<u32>())
        .transpose()
        .context("SEARCH_EXPERIENCE_YEARS must be a number")?;

    let orchestrator = ScrapeOrchestrator::new(config.clone());
    let categorized = orchestrator.search_or_empty(skills, &location, experience_years, max_jobs);

    println!("{}", serde_json::to_string_pretty(&categorized)?);
    Ok(())
}

async fn run_resume(config: &EngineConfig, rest: &[String]) -> Result<()> {
    let path = rest.first().context("resume needs a path to a PDF file")?;
    let bytes = std::fs::read(path).with_context(|| format!("cannot read '{path}'"))?;

    let extractor = build_extractor(&config.extractor_backend);
    let profile = parse_resume(&bytes, extractor.as_ref()).await?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
