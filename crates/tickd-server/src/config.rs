// ABOUTME: Configuration loading for the tickd server from environment variables.
// ABOUTME: Covers the bind address and the Redis connection parameters.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TICKD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("TICKD_REDIS_DB is not a valid database index: {0}")]
    InvalidRedisDb(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub redis_url: String,
    pub redis_db: i64,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// Environment variables:
    /// - TICKD_BIND: socket address to bind (default: 127.0.0.1:8080)
    /// - TICKD_REDIS_URL: Redis URL (default: redis://127.0.0.1:6379)
    /// - TICKD_REDIS_DB: Redis database index (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str = std::env::var("TICKD_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let redis_url = std::env::var("TICKD_REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let redis_db_str = std::env::var("TICKD_REDIS_DB").unwrap_or_else(|_| "0".to_string());
        let redis_db: i64 = redis_db_str
            .parse()
            .map_err(|_| ConfigError::InvalidRedisDb(redis_db_str))?;

        Ok(Self {
            bind,
            redis_url,
            redis_db,
        })
    }

    /// The full Redis connection URL including the database index.
    pub fn redis_connection_url(&self) -> String {
        format!("{}/{}", self.redis_url.trim_end_matches('/'), self.redis_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_loads_defaults() {
        // SAFETY: test-only code, single-threaded test execution
        unsafe {
            std::env::remove_var("TICKD_BIND");
            std::env::remove_var("TICKD_REDIS_URL");
            std::env::remove_var("TICKD_REDIS_DB");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.redis_db, 0);
        assert_eq!(config.redis_connection_url(), "redis://127.0.0.1:6379/0");
    }

    #[test]
    fn config_rejects_invalid_bind() {
        // SAFETY: test-only code, single-threaded test execution
        unsafe {
            std::env::set_var("TICKD_BIND", "not-an-address");
        }

        let result = Config::from_env();

        // SAFETY: test-only code, single-threaded test execution
        unsafe {
            std::env::remove_var("TICKD_BIND");
        }

        assert!(matches!(result, Err(ConfigError::InvalidBind(_))));
    }
}
