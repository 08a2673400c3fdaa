//! Duel client binary.
//!
//! Loads the roster and battle rules from the data directory, then hands the
//! terminal to the duel UI.

use anyhow::{Context, Result};
use duel_client::{CliConfig, DuelApp, logging, presentation};
use duel_content::ContentFactory;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging(&config)?;

    tracing::info!("Starting duel client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(config.data_dir.clone());
    let roster = factory
        .load_roster()
        .with_context(|| format!("Failed to load roster from {}", config.data_dir.display()))?;
    let rules = factory.load_config().context("Failed to load battle rules")?;
    tracing::info!("Rules: exhausted damage divisor {}", rules.effective_divisor());

    presentation::run(DuelApp::new(roster, rules, config)).await
}
