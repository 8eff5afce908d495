//! Transport error types.

use thiserror::Error;

/// Errors that can occur while dispatching an API call.
///
/// Every failure mode of the transport is converted into one of these
/// variants; nothing escapes the transport boundary as a panic. Exchange
/// error codes inside a well-formed JSON body are not an error at this
/// layer; they come back to the caller as an ordinary payload.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed: DNS, TCP, TLS, or timeout failure.
    #[error("network error: {method} {path}: {cause}")]
    Network {
        /// HTTP method of the failed call.
        method: &'static str,
        /// Request path of the failed call.
        path: String,
        /// Underlying cause, suitable for logging.
        cause: String,
    },

    /// The server answered but the body is not valid JSON.
    #[error("invalid JSON response (HTTP {status}): {body}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// Failed to build the HTTP client.
    #[error("client build error: {0}")]
    Build(String),
}

impl TransportError {
    /// Whether the caller may reasonably retry the call. The transport
    /// itself never retries; a retried order could double-execute.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Network { .. })
    }

    pub(crate) fn network(method: &'static str, path: &str, err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            format!("timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };

        TransportError::Network {
            method,
            path: path.to_string(),
            cause,
        }
    }
}
