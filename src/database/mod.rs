use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod actors;
pub mod models;
pub mod movies;

pub use actors::ActorRepository;
pub use movies::MovieRepository;

/// Connect a pool against the configured database, failing fast at startup.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
