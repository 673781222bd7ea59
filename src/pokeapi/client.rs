//! Pokémon API accessors
//!
//! Thin typed accessors over the cached fetcher. Each accessor composes a
//! logical cache key independent of the resource URL and picks the TTL for
//! its endpoint class: index-style payloads use the list TTL, individual
//! Pokémon use the longer detail TTL.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetch::{CachedFetcher, RequestOptions};
use crate::pokeapi::models::{NamedResource, PokemonDetail, PokemonPage, TypePage};

/// Page size used when fetching the full index for client-side search.
const SEARCH_INDEX_LIMIT: u32 = 2000;

// == Poke Client ==
/// Typed client for the Pokémon API, reading through the shared cache.
#[derive(Clone)]
pub struct PokeClient {
    fetcher: CachedFetcher,
    base_url: String,
    list_ttl_ms: u64,
    detail_ttl_ms: u64,
}

impl PokeClient {
    // == Constructor ==
    /// Creates a client over the given fetcher, configured from `config`.
    pub fn new(fetcher: CachedFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            list_ttl_ms: config.list_ttl_ms,
            detail_ttl_ms: config.detail_ttl_ms,
        }
    }

    // == List ==
    /// Fetches one page of the Pokémon index.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let resource = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        let cache_key = format!("pokemon-list-{}-{}", limit, offset);

        let value = self
            .fetcher
            .cached_fetch(&resource, RequestOptions::default(), &cache_key, self.list_ttl_ms)
            .await?;
        decode(&resource, value)
    }

    // == Detail ==
    /// Fetches a single Pokémon by name or dex number.
    pub async fn detail(&self, name_or_id: &str) -> Result<PokemonDetail> {
        let ident = name_or_id.trim().to_lowercase();
        let resource = format!("{}/pokemon/{}", self.base_url, ident);
        let cache_key = format!("pokemon-{}", ident);

        let value = self
            .fetcher
            .cached_fetch(&resource, RequestOptions::default(), &cache_key, self.detail_ttl_ms)
            .await?;
        decode(&resource, value)
    }

    // == Search ==
    /// Finds Pokémon whose name contains `query` (case-insensitive).
    ///
    /// The upstream has no search endpoint, so the full index is fetched
    /// once under a single cache key and filtered client-side; repeated
    /// searches within the list TTL never touch the network.
    pub async fn search(&self, query: &str) -> Result<Vec<NamedResource>> {
        let resource = format!(
            "{}/pokemon?limit={}&offset=0",
            self.base_url, SEARCH_INDEX_LIMIT
        );

        let value = self
            .fetcher
            .cached_fetch(
                &resource,
                RequestOptions::default(),
                "pokemon-list-all",
                self.list_ttl_ms,
            )
            .await?;
        let page: PokemonPage = decode(&resource, value)?;

        let needle = query.trim().to_lowercase();
        let matches: Vec<NamedResource> = page
            .results
            .into_iter()
            .filter(|entry| entry.name.contains(&needle))
            .collect();

        debug!(query, matches = matches.len(), "search complete");
        Ok(matches)
    }

    // == By Type ==
    /// Lists the Pokémon belonging to a type.
    pub async fn by_type(&self, type_name: &str) -> Result<Vec<NamedResource>> {
        let ident = type_name.trim().to_lowercase();
        let resource = format!("{}/type/{}", self.base_url, ident);
        let cache_key = format!("pokemon-type-{}", ident);

        let value = self
            .fetcher
            .cached_fetch(&resource, RequestOptions::default(), &cache_key, self.list_ttl_ms)
            .await?;
        let page: TypePage = decode(&resource, value)?;

        Ok(page.pokemon.into_iter().map(|member| member.pokemon).collect())
    }

    // == Fetcher ==
    /// Returns the underlying fetcher, e.g. for the diagnostics surface.
    pub fn fetcher(&self) -> &CachedFetcher {
        &self.fetcher
    }
}

// == Decode ==
/// Converts a cached JSON payload into its typed model.
fn decode<T: DeserializeOwned>(resource: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| FetchError::Decode {
        resource: resource.to_string(),
        message: err.to_string(),
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Transport;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Transport double answering canned PokeAPI payloads by URL shape.
    struct FixtureTransport {
        calls: AtomicUsize,
    }

    impl FixtureTransport {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for FixtureTransport {
        async fn perform(&self, resource: &str, _options: &RequestOptions) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if resource.contains("/type/") {
                return Ok(json!({
                    "pokemon": [
                        {"pokemon": {"name": "pikachu", "url": "u/25"}, "slot": 1},
                        {"pokemon": {"name": "raichu", "url": "u/26"}, "slot": 1}
                    ]
                }));
            }
            if resource.contains("/pokemon?") {
                return Ok(json!({
                    "count": 3,
                    "next": null,
                    "previous": null,
                    "results": [
                        {"name": "bulbasaur", "url": "u/1"},
                        {"name": "charmander", "url": "u/4"},
                        {"name": "charizard", "url": "u/6"}
                    ]
                }));
            }
            Ok(json!({
                "id": 25,
                "name": "pikachu",
                "height": 4,
                "weight": 60,
                "types": [
                    {"slot": 1, "type": {"name": "electric", "url": "u/t13"}}
                ],
                "sprites": {"front_default": null}
            }))
        }
    }

    fn test_client(transport: Arc<FixtureTransport>) -> PokeClient {
        let fetcher = CachedFetcher::new(transport);
        PokeClient::new(fetcher, &Config::default())
    }

    #[tokio::test]
    async fn test_list_composes_key_and_decodes() {
        let transport = Arc::new(FixtureTransport::new());
        let client = test_client(transport.clone());

        let page = client.list(20, 0).await.unwrap();
        assert_eq!(page.count, 3);
        assert_eq!(page.results[0].name, "bulbasaur");

        let stats = client.fetcher().stats().await;
        assert!(stats.keys.contains(&"pokemon-list-20-0".to_string()));
    }

    #[tokio::test]
    async fn test_detail_key_uses_identifier() {
        let transport = Arc::new(FixtureTransport::new());
        let client = test_client(transport.clone());

        let detail = client.detail("Pikachu").await.unwrap();
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.id, 25);

        // Identifier is normalized before composing the key
        let stats = client.fetcher().stats().await;
        assert!(stats.keys.contains(&"pokemon-pikachu".to_string()));
    }

    #[tokio::test]
    async fn test_detail_second_read_is_a_hit() {
        let transport = Arc::new(FixtureTransport::new());
        let client = test_client(transport.clone());

        client.detail("pikachu").await.unwrap();
        client.detail("pikachu").await.unwrap();

        assert_eq!(transport.call_count(), 1);
        assert_eq!(client.fetcher().stats().await.hits, 1);
    }

    #[tokio::test]
    async fn test_search_filters_client_side() {
        let transport = Arc::new(FixtureTransport::new());
        let client = test_client(transport.clone());

        let matches = client.search("char").await.unwrap();
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["charmander", "charizard"]);

        // Repeat search answers from the cached index
        client.search("bulba").await.unwrap();
        assert_eq!(transport.call_count(), 1);

        let stats = client.fetcher().stats().await;
        assert!(stats.keys.contains(&"pokemon-list-all".to_string()));
    }

    #[tokio::test]
    async fn test_by_type_flattens_members() {
        let transport = Arc::new(FixtureTransport::new());
        let client = test_client(transport.clone());

        let members = client.by_type("Electric").await.unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["pikachu", "raichu"]);

        let stats = client.fetcher().stats().await;
        assert!(stats.keys.contains(&"pokemon-type-electric".to_string()));
    }

    #[tokio::test]
    async fn test_decode_failure_surfaces_as_decode_error() {
        struct MalformedTransport;

        #[async_trait]
        impl Transport for MalformedTransport {
            async fn perform(&self, _resource: &str, _options: &RequestOptions) -> Result<Value> {
                Ok(json!({"unexpected": true}))
            }
        }

        let fetcher = CachedFetcher::new(Arc::new(MalformedTransport));
        let client = PokeClient::new(fetcher, &Config::default());

        let outcome = client.detail("pikachu").await;
        assert!(matches!(outcome, Err(FetchError::Decode { .. })));
    }
}
