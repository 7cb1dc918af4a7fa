/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (default: sqlite://taskhome.db)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `API_PREFIX`: Path prefix for API routes (default: /api)
/// - `ASANA_SEED_WORKSPACE_NAME`: Name of the workspace seeded at startup
///   (default: "Demo Workspace")
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use taskhome_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}:{}", config.api.host, config.api.port);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Startup seeding configuration
    pub seed: SeedConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Path prefix all API routes are nested under (e.g., "/api")
    pub prefix: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Startup seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Name of the default workspace created at startup
    pub workspace_name: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Every variable has a default, so a bare environment yields a working
    /// local configuration with a file-based store.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but has an invalid value
    /// (e.g., a non-numeric port).
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;
        let api_prefix = env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string());
        validate_prefix(&api_prefix)?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://taskhome.db".to_string());
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let workspace_name = env::var("ASANA_SEED_WORKSPACE_NAME")
            .unwrap_or_else(|_| "Demo Workspace".to_string());

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                prefix: api_prefix,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            seed: SeedConfig { workspace_name },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

/// Validates the API path prefix
///
/// The prefix is nested into the router, which panics on a bare "/" or a
/// trailing slash, so both are rejected here at load time.
fn validate_prefix(prefix: &str) -> anyhow::Result<()> {
    if !prefix.starts_with('/') {
        anyhow::bail!("API_PREFIX must start with '/'");
    }
    if prefix == "/" || prefix.ends_with('/') {
        anyhow::bail!("API_PREFIX must not be '/' or end with '/'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                prefix: "/api".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite://taskhome.db".to_string(),
                max_connections: 10,
            },
            seed: SeedConfig {
                workspace_name: "Demo Workspace".to_string(),
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(test_config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("/api").is_ok());
        assert!(validate_prefix("/api/v1").is_ok());

        assert!(validate_prefix("api").is_err(), "must start with a slash");
        assert!(validate_prefix("/").is_err(), "bare root would panic on nest");
        assert!(validate_prefix("/api/").is_err(), "no trailing slash");
    }
}
