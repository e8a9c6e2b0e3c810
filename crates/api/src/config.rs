//! Process configuration from the environment.

use barkeep_auth::JwksClient;

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub issuer: String,
    pub audience: String,
    pub jwks_url: String,
}

impl Config {
    /// Read configuration from environment variables, falling back to
    /// development defaults (and warning) where unset.
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("BARKEEP_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:barkeep.db".to_string());

        let issuer = std::env::var("AUTH_ISSUER").unwrap_or_else(|_| {
            tracing::warn!("AUTH_ISSUER not set; using dev issuer");
            "https://dev-barkeep.example/".to_string()
        });
        let audience = std::env::var("AUTH_AUDIENCE").unwrap_or_else(|_| {
            tracing::warn!("AUTH_AUDIENCE not set; using dev audience");
            "drinks".to_string()
        });
        let jwks_url = std::env::var("AUTH_JWKS_URL")
            .unwrap_or_else(|_| JwksClient::well_known_url(&issuer));

        Self {
            listen_addr,
            database_url,
            issuer,
            audience,
            jwks_url,
        }
    }
}
