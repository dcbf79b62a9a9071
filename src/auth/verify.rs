use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::error::AuthError;
use super::jwks::KeyFetcher;
use super::Claims;

/// Verifies bearer tokens against the identity provider's rotating key set.
///
/// Each call fetches the current JWKS, matches the token's `kid` against it
/// and validates signature, issuer, audience and expiry. The algorithm
/// allow-list is exactly RS256; an empty or non-matching key set is a hard
/// failure, never a default-accept.
#[derive(Clone)]
pub struct TokenVerifier {
    fetcher: KeyFetcher,
    issuer: String,
    audience: String,
}

impl TokenVerifier {
    /// Build a verifier for an Auth0-style provider domain.
    pub fn new(domain: &str, audience: &str) -> Self {
        Self::with_jwks_url(
            format!("https://{domain}/.well-known/jwks.json"),
            format!("https://{domain}/"),
            audience,
        )
    }

    /// Build a verifier against an explicit JWKS endpoint.
    pub fn with_jwks_url(
        jwks_url: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            fetcher: KeyFetcher::new(jwks_url),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::TokenInvalid)?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

        let jwks = self.fetcher.fetch().await?;
        let jwk = jwks.find(&kid).ok_or(AuthError::UnknownKeyId)?;

        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|_| AuthError::TokenInvalid)?;

        let mut validation = Validation::new(Algorithm::RS256);
        // No clock-skew allowance: a token past its exp is expired.
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(map_decode_error(e)),
        }
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
        _ => AuthError::TokenInvalid,
    }
}
