//! Pokémon API payload models
//!
//! Typed views of the upstream JSON bodies the accessors consume. Unknown
//! fields are ignored, so the models track only what the browsing tool
//! displays.

use serde::{Deserialize, Serialize};

/// A name plus the canonical URL of the named resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "pikachu"
    pub name: String,
    /// Canonical resource URL
    pub url: String,
}

/// One page of the Pokémon index (`GET /pokemon?limit&offset`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of Pokémon known upstream
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Entries on this page
    pub results: Vec<NamedResource>,
}

/// A single Pokémon (`GET /pokemon/{name-or-id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetail {
    /// National dex number
    pub id: u64,
    /// Pokémon name
    pub name: String,
    /// Height in decimeters
    pub height: u64,
    /// Weight in hectograms
    pub weight: u64,
    /// Type memberships in slot order
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Sprite URLs
    #[serde(default)]
    pub sprites: Sprites,
}

/// A type membership entry on a Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Slot number (primary type is 1)
    pub slot: u8,
    /// The type itself
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Sprite URLs for a Pokémon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front-facing sprite, if available
    pub front_default: Option<String>,
}

/// Membership listing of a type (`GET /type/{name}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypePage {
    /// Pokémon belonging to this type
    pub pokemon: Vec<TypeMember>,
}

/// One member of a type listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMember {
    /// The member Pokémon
    pub pokemon: NamedResource,
}
