pub mod error;
pub mod jwks;
pub mod verify;

pub use error::AuthError;
pub use verify::TokenVerifier;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded claim set of a verified access token.
///
/// `aud` is kept as a raw value because the provider may issue it as a
/// string or an array; the verifier validates it either way. `sub` is only
/// carried for logging, so its absence is not a failure. Owned for the
/// lifetime of one request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    #[serde(default)]
    pub aud: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Check that the claim set grants a single required permission.
pub fn check_permissions(required: &str, claims: &Claims) -> Result<(), AuthError> {
    let permissions = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::PermissionsMissing)?;

    if !permissions.iter().any(|p| p == required) {
        return Err(AuthError::PermissionDenied);
    }

    Ok(())
}
