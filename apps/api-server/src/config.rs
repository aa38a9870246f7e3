//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Origins the browser client is served from. Used when `ALLOWED_ORIGINS`
/// is not set.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3001,https://dukaan-hisaab.vercel.app";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Browser origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./dukaan.db".to_string()),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        };

        if config.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue("ALLOWED_ORIGINS".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins_parse() {
        let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS
            .split(',')
            .map(|o| o.trim().to_string())
            .collect();
        assert_eq!(origins.len(), 2);
        assert!(origins[0].starts_with("http://localhost"));
    }
}
