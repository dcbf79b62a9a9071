use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{check_permissions, AuthError};
use crate::error::ApiError;

/// Pull the bearer token out of the Authorization header.
///
/// The header must split into exactly two whitespace-separated parts and
/// the first must be "bearer" (case-insensitive). The token is returned
/// unmodified.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::AuthorizationHeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(AuthError::MalformedHeader),
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::UnexpectedScheme);
    }

    Ok(token)
}

/// Authorization gate wrapped around every protected route.
///
/// Linear pipeline: extract the bearer token, verify it against the
/// provider's current key set, check the route's single required
/// permission. Any stage failure short-circuits with that stage's status
/// and the handler is never invoked. On success the decoded claims are
/// inserted into request extensions, so handlers receive them as an
/// explicit `Extension<Claims>` parameter.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
    permission: &'static str,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?.to_owned();

    let claims = state.verifier.verify(&token).await?;

    check_permissions(permission, &claims)?;

    tracing::debug!(
        sub = claims.sub.as_deref().unwrap_or("-"),
        permission,
        "request authorized"
    );
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
