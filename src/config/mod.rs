use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Identity provider settings used by the token verifier.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Provider domain, e.g. `example.us.auth0.com`. The JWKS endpoint and
    /// expected issuer are derived from it.
    pub domain: String,
    pub audience: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the environment. Required values missing at
    /// startup are a hard failure.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let domain =
            env::var("AUTH0_DOMAIN").map_err(|_| ConfigError::Missing("AUTH0_DOMAIN"))?;

        let audience =
            env::var("AUTH0_AUDIENCE").map_err(|_| ConfigError::Missing("AUTH0_AUDIENCE"))?;

        Ok(Self {
            port,
            database_url,
            auth: AuthConfig { domain, audience },
        })
    }
}
