//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO eviction and TTL
//! expiration.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, StatsSnapshot};

// == Cache Store ==
/// Bounded, time-aware key-value storage with hit/miss accounting.
///
/// Misses are the normal signaled outcome of a lookup, never an error, so
/// every operation on the store is total. Expired entries are removed
/// lazily when read; `purge_expired` exists to bound memory between reads.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion-order tracker for FIFO eviction
    order: InsertionOrder,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries retained
    max_entries: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity bound.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of live entries the store retains
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and fresh, recording a hit. A missing
    /// key, or a present key whose TTL has elapsed, records a miss and
    /// returns None; the expired entry is removed as a side effect.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.record_miss();
                debug!(key, "expired entry removed on read");
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites an entry expiring `ttl_ms` from now.
    ///
    /// Overwriting an existing key resets its insertion time and never
    /// evicts. Inserting a new key while at capacity first evicts exactly
    /// one entry, the oldest by insertion time.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The payload to store
    /// * `ttl_ms` - Freshness window in milliseconds (0 expires immediately)
    pub fn set(&mut self, key: String, value: V, ttl_ms: u64) {
        let is_overwrite = self.entries.contains_key(&key);

        // A new key past the capacity bound evicts the oldest entry first
        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!(evicted = %evicted_key, "capacity eviction");
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl_ms));
        self.order.record(&key);
    }

    // == Clear ==
    /// Empties the store and resets all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::new();
    }

    // == Snapshot ==
    /// Returns a read-only snapshot of the store state.
    ///
    /// Performs no eviction or expiration side effects; `keys` may still
    /// list entries whose TTL has elapsed.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            size: self.entries.len(),
            max_entries: self.max_entries,
            hits: self.stats.hits,
            misses: self.stats.misses,
            evictions: self.stats.evictions,
            hit_rate: self.stats.hit_rate(),
            keys: self.entries.keys().cloned().collect(),
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed. Purging is a memory bound,
    /// not a correctness mechanism, and records neither hits nor misses.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        count
    }

    // == Length ==
    /// Returns the current number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
