use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::auth::Claims;
use crate::database::models::{CreateActorRequest, UpdateActorRequest};
use crate::database::ActorRepository;
use crate::error::ApiError;

/// GET /actor - list all actors (404 when the roster is empty)
pub async fn list(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let actors = ActorRepository::new(state.pool.clone()).list().await?;

    if actors.is_empty() {
        return Err(ApiError::NotFound("actors"));
    }

    let actors: Vec<Value> = actors
        .iter()
        .map(|a| json!({ "id": a.id, "name": a.name }))
        .collect();

    Ok(Json(json!({ "success": true, "actors": actors })))
}

/// POST /add-actor - create an actor (422 when name, age or gender is missing)
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateActorRequest>,
) -> Result<Json<Value>, ApiError> {
    let name = payload
        .name
        .ok_or_else(|| ApiError::unprocessable("name is required"))?;
    let age = payload
        .age
        .ok_or_else(|| ApiError::unprocessable("age is required"))?;
    let gender = payload
        .gender
        .ok_or_else(|| ApiError::unprocessable("gender is required"))?;

    let actor = ActorRepository::new(state.pool.clone())
        .create(&name, age, &gender)
        .await?;

    tracing::info!(
        sub = claims.sub.as_deref().unwrap_or("-"),
        actor_id = actor.id,
        "actor created"
    );

    Ok(Json(json!({
        "success": true,
        "message": format!("Actor with name \"{}\" is inserted into DB", actor.name),
        "actor": actor,
    })))
}

/// PATCH /actor/{id} - partial update (404 when the id is unknown)
pub async fn update(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
    Extension(_claims): Extension<Claims>,
    Json(payload): Json<UpdateActorRequest>,
) -> Result<Json<Value>, ApiError> {
    let actor = ActorRepository::new(state.pool.clone())
        .update(actor_id, &payload)
        .await?
        .ok_or(ApiError::NotFound("actor"))?;

    Ok(Json(json!({ "success": true, "actor": actor })))
}

/// DELETE /actor/{id} - delete (404 when the id is unknown)
pub async fn delete(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let deleted = ActorRepository::new(state.pool.clone())
        .delete(actor_id)
        .await?;

    if !deleted {
        return Err(ApiError::NotFound("actor"));
    }

    tracing::info!(
        sub = claims.sub.as_deref().unwrap_or("-"),
        actor_id,
        "actor deleted"
    );

    Ok(Json(json!({ "success": true, "actor_id": actor_id })))
}
