//! Pokedex CLI - an interactive Pokedex backed by the PokeAPI
//!
//! Responses are cached in memory for a configurable interval, so
//! browsing back and forth never refetches a page it already has.

mod cache;
mod client;
mod config;
mod error;
mod models;
mod repl;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client::PokeApiClient;
use config::Config;
use repl::Repl;

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so log lines
///    never interleave with the prompt)
/// 2. Load configuration from environment variables
/// 3. Create the API client, which starts the cache's reaper task
/// 4. Run the REPL until `exit` or end of input
/// 5. Shut the cache down cleanly
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.base_url,
        cache_interval_secs = config.cache_interval.as_secs(),
        "configuration loaded"
    );

    let client = PokeApiClient::with_base_url(&config.base_url, config.cache_interval)
        .context("failed to create PokeAPI client")?;

    let mut repl = Repl::new(client.clone(), config.catch_threshold);
    repl.run().await.context("REPL terminated abnormally")?;

    client.shutdown();
    info!("shutdown complete");
    Ok(())
}
