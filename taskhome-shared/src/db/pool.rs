/// Database connection pool management
///
/// This module provides a SQLite connection pool using sqlx. It includes a
/// startup health check and proper error handling. The store is file-based by
/// default; a missing database file is created on first connect.
///
/// # Example
///
/// ```no_run
/// use taskhome_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://taskhome.db".to_string(),
///         max_connections: 10,
///         acquire_timeout_seconds: 30,
///     };
///
///     let pool = create_pool(config).await?;
///
///     let row: (i64,) = sqlx::query_as("SELECT ?")
///         .bind(42i64)
///         .fetch_one(&pool)
///         .await?;
///
///     Ok(())
/// }
/// ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the database connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://taskhome.db" or "sqlite::memory:")
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            acquire_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes a SQLite connection pool
///
/// This function:
/// 1. Creates a pool with the specified configuration, creating the database
///    file if it does not exist yet
/// 2. Performs a health check to verify the store is reachable
///
/// # Errors
///
/// Returns an error if the database URL is invalid, the pool cannot connect,
/// or the health check fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        acquire_timeout_seconds = config.acquire_timeout_seconds,
        "Creating database connection pool"
    );

    let connect_options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect_with(connect_options)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a simple query to verify the store is reachable and responding.
///
/// # Errors
///
/// Returns an error if the health check query fails
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        warn!(
            "Database health check returned unexpected value: {}",
            result.0
        );
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
///
/// This should be called during application shutdown to ensure all
/// connections are properly closed and resources are released.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_seconds, 30);
        assert!(config.url.is_empty());
    }

    #[tokio::test]
    async fn test_create_pool_in_memory() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 5,
        };

        let pool = create_pool(config).await.expect("pool should connect");
        health_check(&pool).await.expect("health check should pass");
        close_pool(pool).await;
    }

    #[tokio::test]
    async fn test_create_pool_with_invalid_url() {
        // A bare word would be treated as a relative database filename and
        // created on the spot; a wrong scheme is rejected outright.
        let config = DatabaseConfig {
            url: "postgres://localhost/taskhome".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 2,
        };

        let result = create_pool(config).await;
        assert!(result.is_err(), "Should fail with a non-sqlite URL");
    }
}
