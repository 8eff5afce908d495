//! HTTP transport for exchange API calls.

use crate::error::TransportError;
use auth::{encode_query, RequestSigner};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Server-side tolerance (ms) for how stale a signed request's timestamp
/// may be before rejection.
const RECV_WINDOW_MS: u64 = 5000;

/// HTTP method for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Transport for API calls against a single base URL.
///
/// Owns the HTTP connection pool for its lifetime. Each call is attempted
/// exactly once; retry decisions belong to the caller.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a transport for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a transport with the default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, TransportError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch an API call and decode the JSON response body.
    ///
    /// GET sends the parameters as a query string; POST sends them as a
    /// form-encoded body. When a signer is given, `timestamp` and
    /// `recvWindow` are appended to the parameters and the signature is
    /// computed over the final set, the exact serialized bytes that go on
    /// the wire.
    ///
    /// The body is decoded whatever the HTTP status: the exchange reports
    /// its own errors as well-formed JSON payloads with 4xx statuses, and
    /// those are returned to the caller verbatim rather than interpreted
    /// here.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        headers: &[(&str, &str)],
        signer: Option<&RequestSigner<'_>>,
    ) -> Result<T, TransportError> {
        let query = match signer {
            Some(signer) => {
                // The timestamp is generated here, immediately before
                // signing; a precomputed one could go stale in a queue and
                // be rejected by the server as outside recvWindow.
                let mut signed: Vec<(&str, String)> = params.to_vec();
                signed.push(("timestamp", epoch_millis().to_string()));
                signed.push(("recvWindow", RECV_WINDOW_MS.to_string()));
                signer.signed_query(&signed)
            }
            None => encode_query(params),
        };

        let param_keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        tracing::debug!(
            method = method.as_str(),
            path,
            params = ?param_keys,
            signed = signer.is_some(),
            "dispatching request"
        );

        let mut request = match method {
            Method::Get => self.client.get(self.build_url(path, &query)),
            Method::Post => self
                .client
                .post(self.build_url(path, ""))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(query),
        };

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::network(method.as_str(), path, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(method.as_str(), path, e))?;

        tracing::debug!(method = method.as_str(), path, status, "response received");

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(status, error = %e, "response body is not valid JSON");
            TransportError::Decode { status, body }
        })
    }

    /// Build a full URL from path and query string.
    fn build_url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }
}

/// Milliseconds since the Unix epoch.
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}
