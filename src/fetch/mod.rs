//! Fetch Module
//!
//! Fetch-through wrapper over the cache store and the network transport.
//!
//! Control flow: caller -> [`CachedFetcher`] -> (cache hit: return) or
//! (cache miss: [`Transport`] -> store insert -> return). Concurrent
//! misses for one cache key are coalesced into a single request.

mod cached;
mod transport;

pub use cached::CachedFetcher;
pub use transport::{HttpTransport, RequestOptions, Transport};
