//! Points API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `POINTS_API_HOST` | `127.0.0.1` |
//! | `POINTS_API_PORT` | `8080` |
//! | `POINTS_API_MAX_BODY_BYTES` | `1048576` (1MB) |
//!
//! Log filtering is configured separately through `RUST_LOG`.

use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum request body size (1MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Points API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("POINTS_API_HOST").unwrap_or(defaults.host),

            port: match lookup("POINTS_API_PORT") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("POINTS_API_PORT".to_string()))?,
                None => defaults.port,
            },

            max_body_bytes: match lookup("POINTS_API_MAX_BODY_BYTES") {
                Some(value) => value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue("POINTS_API_MAX_BODY_BYTES".to_string())
                })?,
                None => defaults.max_body_bytes,
            },
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("POINTS_API_HOST".to_string()));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "POINTS_API_MAX_BODY_BYTES".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
