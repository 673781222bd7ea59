//! Configuration Module
//!
//! Handles loading and managing runtime configuration from environment
//! variables.

use std::env;

use crate::cache::DEFAULT_MAX_ENTRIES;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The two TTL classes mirror how the browsing tool uses the
/// upstream: index-style payloads turn over faster than individual
/// Pokémon, so lists get 10 minutes and details 30.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream API
    pub api_base_url: String,
    /// Maximum number of entries the cache retains
    pub max_entries: usize,
    /// Freshness window for index-style payloads, in milliseconds
    pub list_ttl_ms: u64,
    /// Freshness window for detail payloads, in milliseconds
    pub detail_ttl_ms: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Upstream base URL (default: https://pokeapi.co/api/v2)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 200)
    /// - `LIST_TTL_MS` - List TTL in milliseconds (default: 600000)
    /// - `DETAIL_TTL_MS` - Detail TTL in milliseconds (default: 1800000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            list_ttl_ms: env::var("LIST_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600_000),
            detail_ttl_ms: env::var("DETAIL_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_800_000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            list_ttl_ms: 600_000,
            detail_ttl_ms: 1_800_000,
            sweep_interval: 60,
        }
    }
}
