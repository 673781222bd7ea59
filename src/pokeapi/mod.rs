//! Pokémon API Module
//!
//! The crate's reference consumer: typed accessors for the Pokémon
//! browsing tool, reading through the shared cache with per-endpoint
//! cache keys and TTLs.

mod client;
pub mod models;

pub use client::PokeClient;
