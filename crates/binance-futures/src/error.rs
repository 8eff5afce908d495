//! Futures client error types.

use auth::AuthError;
use rest_client::TransportError;
use thiserror::Error;

/// Errors surfaced by the futures order client.
///
/// Exchange-level error payloads (`{"code": -1021, "msg": ...}`) are
/// deliberately NOT a variant here: they arrive as well-formed JSON and
/// pass through to the caller as an ordinary payload. Interpreting them
/// is the caller's concern.
#[derive(Debug, Error)]
pub enum FuturesApiError {
    /// Transport failure (network, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Credential loading failure.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),
}

impl FuturesApiError {
    /// Whether the caller may reasonably retry. The client never retries
    /// on its own: a retried market order could double-execute.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_retryable(),
            Self::Auth(_) => false,
        }
    }
}
