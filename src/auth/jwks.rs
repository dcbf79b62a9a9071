use serde::Deserialize;

use super::error::AuthError;

/// One entry from the identity provider's published key set.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: String,
    #[serde(rename = "use")]
    pub key_use: Option<String>,
    pub n: String,
    pub e: String,
}

/// The provider's full key set, as served from the JWKS endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    /// Find the key whose id matches the token header's `kid`.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

/// Retrieves the current key set from the provider on every call.
///
/// Deliberately uncached: each verification performs its own round-trip, so
/// key rotation is always honored and no cross-request state exists. No
/// retries; the transport default timeout applies.
#[derive(Clone)]
pub struct KeyFetcher {
    client: reqwest::Client,
    jwks_url: String,
}

impl KeyFetcher {
    pub fn new(jwks_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            jwks_url: jwks_url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Jwks, AuthError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::JwksUnavailable(e.to_string()))?;

        response
            .json::<Jwks>()
            .await
            .map_err(|e| AuthError::JwksUnavailable(e.to_string()))
    }
}
