use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{Movie, UpdateMovieRequest};

/// Create/read/update/delete passthroughs for the movies table.
///
/// Holds an explicit pool handle injected by the caller; repositories carry
/// no state of their own.
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT id, title, release_date FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(
        &self,
        title: &str,
        release_date: DateTime<Utc>,
    ) -> Result<Movie, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, release_date) VALUES ($1, $2) \
             RETURNING id, title, release_date",
        )
        .bind(title)
        .bind(release_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Apply the provided fields to an existing row. Returns `None` when the
    /// id does not exist.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateMovieRequest,
    ) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET \
                 title = COALESCE($2, title), \
                 release_date = COALESCE($3, release_date) \
             WHERE id = $1 \
             RETURNING id, title, release_date",
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.release_date)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns `false` when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
