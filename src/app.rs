use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{from_fn_with_state, Next},
    response::IntoResponse,
    routing::{delete, get, patch, post, MethodRouter},
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::TokenVerifier;
use crate::handlers::{actors, movies};
use crate::middleware::authorize;

/// Shared handles injected into every request: the storage pool and the
/// token verifier. Cloned per request, no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub verifier: TokenVerifier,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected API, one permission per operation
        .merge(movie_routes(state.clone()))
        .merge(actor_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn movie_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/movie", guarded(get(movies::list), &state, "get:movie"))
        .route("/add-movie", guarded(post(movies::create), &state, "post:add-movie"))
        .route("/movie/:id", guarded(patch(movies::update), &state, "patch:movie"))
        .route("/movie/:id", guarded(delete(movies::delete), &state, "delete:movie"))
}

fn actor_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/actor", guarded(get(actors::list), &state, "get:actor"))
        .route("/add-actor", guarded(post(actors::create), &state, "post:add-actor"))
        .route("/actor/:id", guarded(patch(actors::update), &state, "patch:actor"))
        .route("/actor/:id", guarded(delete(actors::delete), &state, "delete:actor"))
}

/// Wrap a route in the authorization gate with its required permission.
fn guarded(
    routes: MethodRouter<AppState>,
    state: &AppState,
    permission: &'static str,
) -> MethodRouter<AppState> {
    routes.route_layer(from_fn_with_state(
        state.clone(),
        move |state: State<AppState>, request: Request, next: Next| {
            authorize(state, request, next, permission)
        },
    ))
}

async fn root() -> Json<serde_json::Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "message": "It worked",
        "data": {
            "name": "Casting Agency API",
            "version": version,
            "endpoints": {
                "movies": "/movie, /add-movie, /movie/:id (protected)",
                "actors": "/actor, /add-actor, /actor/:id (protected)",
                "health": "/health (public)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": { "status": "degraded", "timestamp": now, "database_error": e.to_string() }
            })),
        ),
    }
}
