//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses, stale reads, and capacity evictions are not errors; the
//! store signals absence through `Option`. The variants here cover only the
//! fetch path, and they are `Clone` so a single settled in-flight request
//! can hand the same outcome to every caller that joined it.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure raised while fetching a resource through the cache.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// Connection or I/O failure reaching the upstream
    #[error("transport failure for {resource}: {message}")]
    Transport {
        /// The resource being fetched
        resource: String,
        /// Underlying failure description
        message: String,
    },

    /// Upstream answered with a non-success status
    #[error("upstream returned status {status} for {resource}")]
    Status {
        /// The resource being fetched
        resource: String,
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded
    #[error("failed to decode response for {resource}: {message}")]
    Decode {
        /// The resource being fetched
        resource: String,
        /// Underlying failure description
        message: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the fetch path.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            resource: "https://pokeapi.co/api/v2/pokemon/25".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "upstream returned status 404 for https://pokeapi.co/api/v2/pokemon/25"
        );
    }

    #[test]
    fn test_error_is_cloneable() {
        let err = FetchError::Transport {
            resource: "r".to_string(),
            message: "connection refused".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
