//! HTTP transport for the futures order client.
//!
//! A thin wrapper around `reqwest` that:
//!
//! - sends parameters as a query string (GET) or form-encoded body (POST)
//! - injects `timestamp`/`recvWindow` and invokes the signer at dispatch
//!   time for authenticated endpoints
//! - converts every failure into a typed [`TransportError`]
//! - decodes response bodies as JSON regardless of HTTP status, so
//!   exchange error payloads pass through to the caller unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{Method, RestClient};
//! use serde_json::Value;
//!
//! let client = RestClient::with_default_timeout("https://testnet.binancefuture.com")?;
//! let time: Value = client.send(Method::Get, "/fapi/v1/time", &[], &[], None).await?;
//! ```

mod client;
mod error;

pub use client::{Method, RestClient};
pub use error::TransportError;
