//! API credential management.
//!
//! The secret key is held in a `SecretString` so it cannot leak through
//! `Debug`/`Display` output and is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Key pair for authenticated Binance futures requests.
///
/// Owned by the client session for its entire lifetime. The API key is
/// public (it travels in a request header); the secret only ever feeds
/// the HMAC signer.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
}

impl ApiCredentials {
    /// Create credentials from explicit values.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        }
    }

    /// Load credentials from `BINANCE_API_KEY` / `BINANCE_API_SECRET`.
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("BINANCE_API_KEY")
            .map_err(|_| AuthError::MissingEnvVar("BINANCE_API_KEY".into()))?;

        let api_secret = std::env::var("BINANCE_API_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("BINANCE_API_SECRET".into()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// The API key, sent in the `X-MBX-APIKEY` header. Safe to log.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing. Never log the return value.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_credentials() {
        let creds = ApiCredentials::new("key123".into(), "hunter2".into());
        assert_eq!(creds.api_key(), "key123");
        assert_eq!(creds.expose_secret(), "hunter2");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("key123".into(), "hunter2".into());
        let rendered = format!("{:?}", creds);

        assert!(rendered.contains("key123"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
