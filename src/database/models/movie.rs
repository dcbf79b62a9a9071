use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: DateTime<Utc>,
}

/// Body of POST /add-movie. Fields are optional so that missing ones can be
/// reported as 422 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
}

/// Body of PATCH /movie/{id}. Only the fields present are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
}
