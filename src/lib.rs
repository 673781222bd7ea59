//! Pokecache - a client-side API response cache
//!
//! Provides a bounded in-memory store with TTL expiration and FIFO
//! eviction, a fetch-through wrapper that de-duplicates concurrent misses,
//! and typed Pokémon API accessors as its reference consumer.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pokeapi;
pub mod tasks;

pub use cache::{CacheStore, StatsSnapshot};
pub use config::Config;
pub use error::FetchError;
pub use fetch::{CachedFetcher, HttpTransport, RequestOptions, Transport};
pub use pokeapi::PokeClient;
pub use tasks::spawn_sweep_task;
