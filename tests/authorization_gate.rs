mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use casting_agency_api::app::app;

async fn get_movies(authorization: Option<&str>) -> Result<Response> {
    let app = app(common::test_state().await);

    let mut request = Request::builder().uri("/movie").method("GET");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    Ok(app.oneshot(request.body(Body::empty())?).await?)
}

async fn body_json(response: Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() -> Result<()> {
    let response = get_movies(None).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "authorization_header_missing");
    Ok(())
}

#[tokio::test]
async fn single_part_header_is_rejected() -> Result<()> {
    let response = get_movies(Some("Bearer")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "malformed_header");
    Ok(())
}

#[tokio::test]
async fn three_part_header_is_rejected() -> Result<()> {
    let response = get_movies(Some("Bearer abc def")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() -> Result<()> {
    let response = get_movies(Some("Token abc")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "unexpected_scheme");
    Ok(())
}

#[tokio::test]
async fn expired_token_is_rejected() -> Result<()> {
    let claims = common::claims(
        Some(vec!["get:movie"]),
        Utc::now().timestamp() - 3600,
    );
    let token = common::sign_token(&claims, Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "token_expired");
    Ok(())
}

#[tokio::test]
async fn recently_expired_token_is_rejected() -> Result<()> {
    // Thirty seconds past exp must already be rejected; the verifier
    // grants no clock-skew leeway.
    let claims = common::claims(
        Some(vec!["get:movie"]),
        Utc::now().timestamp() - 30,
    );
    let token = common::sign_token(&claims, Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "token_expired");
    Ok(())
}

#[tokio::test]
async fn token_without_key_id_is_rejected() -> Result<()> {
    let token = common::sign_token(&common::unexpired(vec!["get:movie"]), None);

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "invalid_header");
    Ok(())
}

#[tokio::test]
async fn token_with_unknown_key_id_is_rejected() -> Result<()> {
    let token = common::sign_token(&common::unexpired(vec!["get:movie"]), Some("rotated-away"));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "invalid_header");
    assert_eq!(body["message"], "unable to find the appropriate key");
    Ok(())
}

#[tokio::test]
async fn wrong_audience_is_rejected() -> Result<()> {
    let mut claims = common::unexpired(vec!["get:movie"]);
    claims.aud = serde_json::json!("some-other-api");
    let token = common::sign_token(&claims, Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "invalid_claims");
    Ok(())
}

#[tokio::test]
async fn token_without_permissions_claim_is_rejected() -> Result<()> {
    let claims = common::claims(None, Utc::now().timestamp() + 3600);
    let token = common::sign_token(&claims, Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "invalid_claims");
    Ok(())
}

#[tokio::test]
async fn missing_permission_never_reaches_the_handler() -> Result<()> {
    // Valid, unexpired token that lacks get:movie. Storage in this suite is
    // unreachable, so anything other than 403 here would mean the handler ran.
    let token = common::sign_token(&common::unexpired(vec!["get:actor"]), Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unauthorized");
    Ok(())
}

#[tokio::test]
async fn token_without_sub_is_authorized() -> Result<()> {
    // sub is carried for logging only; a verified token without it still
    // passes the gate. The handler then fails on the unreachable pool.
    let mut claims = common::unexpired(vec!["get:movie"]);
    claims.sub = None;
    let token = common::sign_token(&claims, Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "internal");
    Ok(())
}

#[tokio::test]
async fn granted_permission_admits_the_request() -> Result<()> {
    // The gate passes and the handler hits the unreachable pool, so the
    // failure comes from storage, not from the authorization path.
    let token = common::sign_token(&common::unexpired(vec!["get:movie"]), Some(common::KID));

    let response = get_movies(Some(&format!("Bearer {token}"))).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "internal");
    Ok(())
}
