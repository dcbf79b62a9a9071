use sqlx::PgPool;

use super::models::{Actor, UpdateActorRequest};

/// Create/read/update/delete passthroughs for the actors table.
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        name: &str,
        age: i32,
        gender: &str,
    ) -> Result<Actor, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) \
             RETURNING id, name, age, gender",
        )
        .bind(name)
        .bind(age)
        .bind(gender)
        .fetch_one(&self.pool)
        .await
    }

    /// Apply the provided fields to an existing row. Returns `None` when the
    /// id does not exist.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateActorRequest,
    ) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "UPDATE actors SET \
                 name = COALESCE($2, name), \
                 age = COALESCE($3, age), \
                 gender = COALESCE($4, gender) \
             WHERE id = $1 \
             RETURNING id, name, age, gender",
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.age)
        .bind(changes.gender.as_deref())
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns `false` when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
