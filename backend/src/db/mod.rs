//! Database connection and pool management
//!
//! The schema is provisioned outside this service, so nothing here runs
//! migrations. Pool acquisition is bounded so a stalled database surfaces
//! as an error instead of a hung request.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Connection options derived from configuration
///
/// Hosted Postgres providers require TLS; with `require_ssl` set the
/// connection is encrypted without verifying the server certificate.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    let mut options = PgConnectOptions::from_str(&config.url)?.application_name("clinica-api");
    if config.require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }
    Ok(options)
}

/// Pool settings derived from configuration
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.query_timeout())
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
}

/// Create a PostgreSQL connection pool
///
/// Connects lazily: the service starts even if the database is down, and
/// the readiness check reports it.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = pool_options(config).connect_lazy_with(connect_options(config)?);

    info!(
        max_connections = config.max_connections,
        acquire_timeout_ms = config.query_timeout_ms,
        ssl = config.require_ssl,
        "Database pool created"
    );

    Ok(pool)
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_connect_options_from_default_config() {
        let config = AppConfig::default().database;
        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_database(), Some("clinica"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = AppConfig::default().database;
        config.url = "not a url".to_string();
        assert!(connect_options(&config).is_err());
    }

    #[test]
    fn test_pool_acquire_bounded_by_query_timeout() {
        let mut config = AppConfig::default().database;
        config.query_timeout_ms = 750;
        let options = pool_options(&config);
        assert_eq!(options.get_acquire_timeout(), Duration::from_millis(750));
        assert_eq!(options.get_max_connections(), config.max_connections);
    }
}
