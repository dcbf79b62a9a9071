use axum::http::StatusCode;
use thiserror::Error;

/// Failure modes of the authorization path.
///
/// Every variant carries a machine-readable code and an HTTP status; both
/// are rendered unmodified at the HTTP boundary. Raised at the point of
/// detection, never retried.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header is expected but not found")]
    AuthorizationHeaderMissing,

    #[error("Authorization header must consist of exactly two parts")]
    MalformedHeader,

    #[error("Authorization header must start with \"Bearer\"")]
    UnexpectedScheme,

    #[error("Authorization token header is missing a key id")]
    MissingKeyId,

    #[error("unable to find the appropriate key")]
    UnknownKeyId,

    #[error("token expired")]
    TokenExpired,

    #[error("incorrect claims, check the audience and issuer")]
    InvalidClaims,

    #[error("permissions not included in token claims")]
    PermissionsMissing,

    #[error("permission not found")]
    PermissionDenied,

    #[error("unable to parse authentication token")]
    TokenInvalid,

    #[error("signing key set unavailable: {0}")]
    JwksUnavailable(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthorizationHeaderMissing
            | AuthError::MalformedHeader
            | AuthError::UnexpectedScheme
            | AuthError::MissingKeyId
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,

            AuthError::UnknownKeyId
            | AuthError::PermissionsMissing
            | AuthError::TokenInvalid => StatusCode::BAD_REQUEST,

            AuthError::PermissionDenied => StatusCode::FORBIDDEN,

            // Infrastructure fault, not an authentication verdict.
            AuthError::JwksUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Stable machine-readable code for the client.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::AuthorizationHeaderMissing => "authorization_header_missing",
            AuthError::MalformedHeader => "malformed_header",
            AuthError::UnexpectedScheme => "unexpected_scheme",
            AuthError::MissingKeyId | AuthError::UnknownKeyId | AuthError::TokenInvalid => {
                "invalid_header"
            }
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
            AuthError::JwksUnavailable(_) => "jwks_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AuthError::AuthorizationHeaderMissing.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::UnknownKeyId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::PermissionDenied.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::PermissionsMissing.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::JwksUnavailable("unreachable".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn key_lookup_failures_share_the_invalid_header_code() {
        assert_eq!(AuthError::MissingKeyId.error_code(), "invalid_header");
        assert_eq!(AuthError::UnknownKeyId.error_code(), "invalid_header");
        assert_eq!(AuthError::TokenInvalid.error_code(), "invalid_header");
    }
}
