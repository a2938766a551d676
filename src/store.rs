//! Connection manager: opens the shared PostgreSQL pool once at startup.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;

/// Open the pool with the configured bounds and verify the database answers.
///
/// A failed ping is returned as an error; callers treat it as fatal at startup.
pub async fn connect(cfg: &DatabaseConfig) -> Result<PgPool, AppError> {
    let options = connect_options(cfg)?;
    let host = options.get_host().to_string();
    let database = options.get_database().unwrap_or_default().to_string();
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_open)
        .min_connections(cfg.min_connections())
        .max_lifetime(cfg.max_lifetime)
        .acquire_timeout(cfg.connect_timeout)
        .connect_with(options)
        .await?;

    ping(&pool).await?;
    tracing::info!(
        %host,
        %database,
        max_open = cfg.max_open,
        min_idle = cfg.min_connections(),
        "database pool opened"
    );
    Ok(pool)
}

/// Parse `DATABASE_URL` when given; otherwise set each field on the builder so
/// credentials are never re-parsed as URL syntax.
pub fn connect_options(cfg: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    if let Some(url) = &cfg.url {
        return Ok(PgConnectOptions::from_str(url)?);
    }
    Ok(PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.name)
        .ssl_mode(PgSslMode::Disable))
}

/// Liveness check used at startup and by the readiness route.
pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
