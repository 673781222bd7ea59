//! Transport Module
//!
//! The network collaborator the cache engine fetches through. The engine
//! only sees success or failure: it never retries, never inspects status
//! codes beyond that split, and never interprets response headers. TTLs
//! are entirely caller-specified.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FetchError, Result};

// == Request Options ==
/// Caller-supplied decoration for the underlying request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra request headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
}

// == Transport Trait ==
/// Performs the actual network request for a cache miss.
///
/// Implementations yield the decoded JSON body on success and a
/// [`FetchError`] on transport, status, or decoding failure.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `resource` and decodes its body.
    async fn perform(&self, resource: &str, options: &RequestOptions) -> Result<Value>;
}

// == HTTP Transport ==
/// Reqwest-backed transport used by real consumers.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, resource: &str, options: &RequestOptions) -> Result<Value> {
        let mut request = self.client.get(resource);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|err| FetchError::Transport {
            resource: resource.to_string(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| FetchError::Decode {
                resource: resource.to_string(),
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_options_default_is_empty() {
        let options = RequestOptions::default();
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_http_transport_construction() {
        // Building the transport must not require any configuration
        let _transport = HttpTransport::new();
    }
}
