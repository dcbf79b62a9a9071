use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::auth::Claims;
use crate::database::models::{CreateMovieRequest, UpdateMovieRequest};
use crate::database::MovieRepository;
use crate::error::ApiError;

/// GET /movie - list all movies (404 when the catalog is empty)
pub async fn list(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let movies = MovieRepository::new(state.pool.clone()).list().await?;

    if movies.is_empty() {
        return Err(ApiError::NotFound("movies"));
    }

    let movies: Vec<Value> = movies
        .iter()
        .map(|m| json!({ "id": m.id, "title": m.title }))
        .collect();

    Ok(Json(json!({ "success": true, "movies": movies })))
}

/// POST /add-movie - create a movie (422 when title or release_date is missing)
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<Json<Value>, ApiError> {
    let title = payload
        .title
        .ok_or_else(|| ApiError::unprocessable("title is required"))?;
    let release_date = payload
        .release_date
        .ok_or_else(|| ApiError::unprocessable("release_date is required"))?;

    let movie = MovieRepository::new(state.pool.clone())
        .create(&title, release_date)
        .await?;

    tracing::info!(
        sub = claims.sub.as_deref().unwrap_or("-"),
        movie_id = movie.id,
        "movie created"
    );

    Ok(Json(json!({
        "success": true,
        "message": format!("Movie with title \"{}\" is inserted into DB", movie.title),
        "movie": movie,
    })))
}

/// PATCH /movie/{id} - partial update (404 when the id is unknown)
pub async fn update(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
    Extension(_claims): Extension<Claims>,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<Json<Value>, ApiError> {
    let movie = MovieRepository::new(state.pool.clone())
        .update(movie_id, &payload)
        .await?
        .ok_or(ApiError::NotFound("movie"))?;

    Ok(Json(json!({ "success": true, "movie": movie })))
}

/// DELETE /movie/{id} - delete (404 when the id is unknown)
pub async fn delete(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let deleted = MovieRepository::new(state.pool.clone())
        .delete(movie_id)
        .await?;

    if !deleted {
        return Err(ApiError::NotFound("movie"));
    }

    tracing::info!(
        sub = claims.sub.as_deref().unwrap_or("-"),
        movie_id,
        "movie deleted"
    );

    Ok(Json(json!({ "success": true, "movie_id": movie_id })))
}
