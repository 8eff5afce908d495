//! Binance USDT-M futures order client.
//!
//! The authenticated request pipeline for placing orders: parameter
//! construction in a fixed insertion order, HMAC-SHA256 signing with
//! injected timing fields, dispatch over HTTPS, and typed failure
//! results.
//!
//! Design notes:
//!
//! - **Pass-through payloads**: responses are returned as raw
//!   `serde_json::Value`, including exchange error payloads such as
//!   `{"code": -1021, "msg": ...}`. The client does not interpret
//!   exchange error codes; callers that need to distinguish them inspect
//!   the payload. Known limitation, kept intentionally.
//! - **No retries**: every command is attempted exactly once. A retried
//!   market order could double-execute; retry decisions stay with the
//!   caller.
//! - **Validation at the edge**: [`validate`] predicates are for the
//!   collaborator driving the client; the command interface itself does
//!   not re-validate.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use binance_futures::{BinanceFuturesClient, OrderSide};
//! use rust_decimal_macros::dec;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let client = BinanceFuturesClient::new(credentials)?;
//!
//! let payload = client
//!     .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
//!     .await?;
//! println!("{payload}");
//! ```

mod client;
mod error;
pub mod params;
mod types;
pub mod validate;

pub use client::BinanceFuturesClient;
pub use error::FuturesApiError;
pub use types::{OrderSide, OrderType, TimeInForce};
pub use validate::{validate_price, validate_quantity, validate_symbol, ValidationError};
