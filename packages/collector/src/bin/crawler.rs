// Entry point for the single-page crawler

use anyhow::{Context, Result};
use clap::Parser;
use collector::{
    Cli, Config, ContentAccessor, EngineKind, FileAccessor, IngestionManager, PassthroughEngine,
    SourceKind, TextEngine, WebPageAccessor, WhitespaceEngine,
};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,collector=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env file if present (development)
    let _ = dotenv();

    let config = Config::from_cli(Cli::parse()).context("Failed to load configuration")?;

    tracing::info!("Scraping {}...", config.target_url);

    let accessor: Box<dyn ContentAccessor> = match config.source {
        SourceKind::Web => {
            Box::new(WebPageAccessor::new().context("Failed to create HTTP client")?)
        }
        SourceKind::File => Box::new(FileAccessor::new()),
    };

    let engine: Box<dyn TextEngine> = match config.engine {
        EngineKind::Passthrough => Box::new(PassthroughEngine::new()),
        EngineKind::Whitespace => Box::new(WhitespaceEngine::new()),
    };

    let manager = IngestionManager::new(accessor, engine, config.api_url);

    let outcome = manager
        .ingest(&config.target_url)
        .await
        .with_context(|| format!("Failed to ingest {}", config.target_url))?;

    tracing::info!(
        status = outcome.status,
        content_length = outcome.content_length,
        submitted_at = %outcome.submitted_at.to_rfc3339(),
        "Successfully ingested content to Core API."
    );
    if let Some(response) = outcome.response {
        tracing::debug!(%response, "Core API response");
    }

    Ok(())
}
