use crate::error::DbError;
use dotenvy::dotenv;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

/// Connection pool tuning, usually filled from the `[database]` settings section.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Explicit connection string. Falls back to `DATABASE_URL` when `None`.
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The connection string comes from `config.url` or, failing that, from the
/// `DATABASE_URL` environment variable (a `.env` file is honoured if present).
pub async fn connect(config: &PoolConfig) -> Result<PgPool, DbError> {
    let database_url = match &config.url {
        Some(url) => url.clone(),
        None => {
            dotenv().ok();
            env::var("DATABASE_URL").map_err(|_e| {
                DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string())
            })?
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Connected to PostgreSQL.");
    Ok(pool)
}
