//! Credential management and request signing for the Binance futures API.
//!
//! - **Credentials**: the API secret lives in a `SecretString` so it cannot
//!   be logged accidentally and is zeroed on drop. Credentials load from
//!   environment variables (or a `.env` file) or are supplied explicitly.
//! - **Signing**: HMAC-SHA256 over the URL-encoded parameter string, with
//!   parameter insertion order preserved. The serialized string that was
//!   signed is the string sent on the wire.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let params = [("symbol", "BTCUSDT".to_string()), ("side", "BUY".to_string())];
//! let query = signer.signed_query(&params);
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::{encode_query, RequestSigner};
