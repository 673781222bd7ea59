//! Pokecache - a client-side API response cache
//!
//! Demo driver: runs a short scripted browse against the upstream API to
//! show cache misses, hits, and the diagnostics snapshot.

mod cache;
mod config;
mod error;
mod fetch;
mod pokeapi;
mod tasks;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use fetch::{CachedFetcher, HttpTransport};
use pokeapi::PokeClient;
use tasks::spawn_sweep_task;

/// Main entry point for the demo driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared fetcher (cache store + HTTP transport)
/// 4. Start the background TTL sweep task
/// 5. Run the scripted browse and log the stats snapshot
/// 6. Abort the sweep task and exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pokecache demo");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, max_entries={}, list_ttl={}ms, detail_ttl={}ms",
        config.api_base_url, config.max_entries, config.list_ttl_ms, config.detail_ttl_ms
    );

    // One shared fetcher for every consumer
    let transport = Arc::new(HttpTransport::new());
    let fetcher = CachedFetcher::with_capacity(transport, config.max_entries);
    info!("Cache store initialized");

    // Start background sweep task
    let sweep_handle = spawn_sweep_task(fetcher.store(), config.sweep_interval);

    let client = PokeClient::new(fetcher.clone(), &config);

    // A short browse: one index page, then the same detail twice. The
    // second detail read must come from the cache.
    let page = client
        .list(20, 0)
        .await
        .context("failed to fetch the Pokémon index")?;
    info!("Index page fetched: {} Pokémon known upstream", page.count);

    let pikachu = client
        .detail("pikachu")
        .await
        .context("failed to fetch pikachu")?;
    info!(
        "Detail fetched: #{} {} ({} types)",
        pikachu.id,
        pikachu.name,
        pikachu.types.len()
    );

    let again = client
        .detail("pikachu")
        .await
        .context("failed to re-fetch pikachu")?;
    info!("Detail re-read: #{} {}", again.id, again.name);

    let stats = fetcher.stats().await;
    info!(
        "Cache stats at {}: size={}/{}, hits={}, misses={}, hit_rate={:.2}, keys={:?}",
        chrono::Utc::now().to_rfc3339(),
        stats.size,
        stats.max_entries,
        stats.hits,
        stats.misses,
        stats.hit_rate,
        stats.keys
    );

    sweep_handle.abort();
    info!("Demo complete");

    Ok(())
}
