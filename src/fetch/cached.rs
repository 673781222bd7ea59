//! Cached Fetcher Module
//!
//! Fetch-through wrapper that makes cache presence transparent to callers
//! that want "get this resource, cached for N milliseconds".

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::cache::{CacheStore, StatsSnapshot, DEFAULT_MAX_ENTRIES};
use crate::error::Result;
use crate::fetch::transport::{RequestOptions, Transport};

/// A settled-or-pending fetch that any number of callers can await.
type SharedFetch = Shared<BoxFuture<'static, Result<Value>>>;

// == Cached Fetcher ==
/// Fetch-through handle over a shared [`CacheStore`] and a [`Transport`].
///
/// Cloning the fetcher produces another handle to the same cache and the
/// same in-flight table, preserving the "one shared cache" semantic without
/// global state.
///
/// Concurrent misses for one cache key are coalesced: the first caller
/// starts the underlying request and later callers await the same pending
/// future, so exactly one network request is issued per key at a time.
/// There is no cancellation and no engine-imposed timeout; a joined caller
/// waits as long as the transport does.
#[derive(Clone)]
pub struct CachedFetcher {
    /// Shared cache store holding decoded response bodies
    cache: Arc<RwLock<CacheStore<Value>>>,
    /// Requests currently in flight, keyed by cache key
    in_flight: Arc<Mutex<HashMap<String, SharedFetch>>>,
    /// The network collaborator used on cache misses
    transport: Arc<dyn Transport>,
}

impl CachedFetcher {
    // == Constructor ==
    /// Creates a fetcher with the default capacity bound.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_capacity(transport, DEFAULT_MAX_ENTRIES)
    }

    /// Creates a fetcher whose store retains at most `max_entries` entries.
    pub fn with_capacity(transport: Arc<dyn Transport>, max_entries: usize) -> Self {
        Self {
            cache: Arc::new(RwLock::new(CacheStore::new(max_entries))),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            transport,
        }
    }

    // == Cached Fetch ==
    /// Returns the payload for `cache_key`, fetching `resource` on a miss.
    ///
    /// On a hit the cached value resolves immediately and no network
    /// activity occurs. On a miss the underlying request is performed (or
    /// joined, if one is already in flight for this key), a successful
    /// payload is inserted with the supplied TTL, and a failure propagates
    /// unchanged without populating the cache.
    ///
    /// # Arguments
    /// * `resource` - What the transport should fetch
    /// * `options` - Request decoration passed through to the transport
    /// * `cache_key` - Logical identifier for the cached operation
    /// * `ttl_ms` - Freshness window for a newly inserted payload
    pub async fn cached_fetch(
        &self,
        resource: &str,
        options: RequestOptions,
        cache_key: &str,
        ttl_ms: u64,
    ) -> Result<Value> {
        // Write lock: reads mutate counters and drop expired entries
        if let Some(value) = self.cache.write().await.get(cache_key) {
            trace!(key = cache_key, "cache hit");
            return Ok(value);
        }

        debug!(key = cache_key, resource, "cache miss");
        let fetch = self.join_or_start(resource, options, cache_key, ttl_ms);
        fetch.await
    }

    // == Join Or Start ==
    /// Returns the pending fetch for `cache_key`, starting one if absent.
    fn join_or_start(
        &self,
        resource: &str,
        options: RequestOptions,
        cache_key: &str,
        ttl_ms: u64,
    ) -> SharedFetch {
        let mut in_flight = self.in_flight.lock();

        if let Some(pending) = in_flight.get(cache_key) {
            debug!(key = cache_key, "joining in-flight request");
            return pending.clone();
        }

        let cache = Arc::clone(&self.cache);
        let slots = Arc::clone(&self.in_flight);
        let transport = Arc::clone(&self.transport);
        let resource = resource.to_string();
        let key = cache_key.to_string();

        let fetch = async move {
            let outcome = transport.perform(&resource, &options).await;

            if let Ok(value) = &outcome {
                cache.write().await.set(key.clone(), value.clone(), ttl_ms);
            }

            // Free the slot once settled, success or failure, so a later
            // miss starts a fresh request
            slots.lock().remove(&key);

            outcome
        }
        .boxed()
        .shared();

        in_flight.insert(cache_key.to_string(), fetch.clone());
        fetch
    }

    // == Stats ==
    /// Returns a read-only snapshot of the underlying store.
    pub async fn stats(&self) -> StatsSnapshot {
        self.cache.read().await.snapshot()
    }

    // == Clear ==
    /// Empties the store and resets its counters.
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }

    // == Store Handle ==
    /// Returns a handle to the shared store, e.g. for the background sweep.
    pub fn store(&self) -> Arc<RwLock<CacheStore<Value>>> {
        Arc::clone(&self.cache)
    }
}
