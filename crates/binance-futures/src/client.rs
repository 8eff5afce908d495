//! Futures order client.

use crate::error::FuturesApiError;
use crate::params;
use crate::types::OrderSide;
use auth::{ApiCredentials, RequestSigner};
use common::BinanceEnvironment;
use rest_client::{Method, RestClient};
use rust_decimal::Decimal;
use serde_json::Value;

/// Order placement endpoint (signed).
const ORDER_PATH: &str = "/fapi/v1/order";

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Client for placing orders on the Binance USDT-M futures API.
///
/// Owns the credential pair and the HTTP connection pool for its entire
/// lifetime; created at startup, dropped at process exit. Stateless
/// otherwise: each command issues exactly one request and returns exactly
/// what the server sent back.
///
/// Input validation is the caller's responsibility (see
/// [`crate::validate`]); this boundary does not re-validate.
pub struct BinanceFuturesClient {
    client: RestClient,
    credentials: ApiCredentials,
}

impl BinanceFuturesClient {
    /// Create a client for the futures testnet.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, FuturesApiError> {
        Self::with_environment(credentials, BinanceEnvironment::Testnet)
    }

    /// Create a client for a specific environment.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: BinanceEnvironment,
    ) -> Result<Self, FuturesApiError> {
        Self::with_base_url(credentials, environment.rest_base_url())
    }

    /// Create a client against an explicit base URL.
    ///
    /// Exists for tests against a local mock server; production code goes
    /// through [`BinanceFuturesClient::with_environment`].
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
    ) -> Result<Self, FuturesApiError> {
        let client = RestClient::with_default_timeout(base_url)?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Create a client from `BINANCE_API_KEY` / `BINANCE_API_SECRET` and
    /// `BINANCE_ENVIRONMENT` (testnet when unset).
    pub fn from_env() -> Result<Self, FuturesApiError> {
        let credentials = ApiCredentials::from_env()?;
        Self::with_environment(credentials, BinanceEnvironment::from_env())
    }

    /// The API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Place a market order.
    ///
    /// POST /fapi/v1/order (signed)
    ///
    /// Returns the decoded exchange payload verbatim. Exchange-level
    /// error payloads come back as `Ok`; only transport failures are
    /// `Err`.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<Value, FuturesApiError> {
        tracing::info!(
            symbol = %symbol,
            side = side.as_binance_str(),
            quantity = %quantity,
            "placing market order"
        );

        self.submit_order(params::market_order(symbol, side, quantity))
            .await
    }

    /// Place a GTC limit order.
    ///
    /// POST /fapi/v1/order (signed)
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value, FuturesApiError> {
        tracing::info!(
            symbol = %symbol,
            side = side.as_binance_str(),
            quantity = %quantity,
            price = %price,
            "placing limit order"
        );

        self.submit_order(params::limit_order(symbol, side, quantity, price))
            .await
    }

    /// Sign and dispatch an order request.
    async fn submit_order(
        &self,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, FuturesApiError> {
        let signer = RequestSigner::new(&self.credentials);
        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        let payload: Value = self
            .client
            .send(Method::Post, ORDER_PATH, &params, &headers, Some(&signer))
            .await?;

        tracing::debug!(payload = %payload, "order response");
        Ok(payload)
    }
}

impl std::fmt::Debug for BinanceFuturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceFuturesClient")
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
