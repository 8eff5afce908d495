//! HMAC-SHA256 request signing for the Binance futures API.

use crate::credentials::ApiCredentials;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signer for authenticated API calls.
///
/// The exchange verifies a signature by re-serializing the request
/// parameters server-side and recomputing the HMAC, so client and server
/// must agree byte-for-byte on encoding and parameter order. Parameters
/// are therefore serialized in insertion order, never sorted, and the
/// serialized string returned by [`RequestSigner::signed_query`] is what
/// must go on the wire, unmodified.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer borrowing the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// HMAC-SHA256 of `message`, keyed by the secret, as lowercase hex.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Serialize `params` as a query string, sign it, and append the
    /// signature.
    ///
    /// The signature covers exactly the parameters present at call time;
    /// appending or reordering anything afterwards invalidates it.
    pub fn signed_query(&self, params: &[(&str, String)]) -> String {
        let query = encode_query(params);
        let signature = self.sign(&query);
        format!("{query}&signature={signature}")
    }
}

/// Serialize parameters as `key1=value1&key2=value2…` with percent-encoded
/// values, preserving insertion order.
pub fn encode_query(params: &[(&str, String)]) -> String {
    serde_urlencoded::to_string(params).expect("string pairs always URL-encode")
}
