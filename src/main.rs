use casting_agency_api::app::{app, AppState};
use casting_agency_api::auth::TokenVerifier;
use casting_agency_api::config::AppConfig;
use casting_agency_api::database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, AUTH0_DOMAIN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = database::connect(&config.database_url).await?;
    let verifier = TokenVerifier::new(&config.auth.domain, &config.auth.audience);

    let app = app(AppState { pool, verifier });

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("casting agency API listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
