//! Server configuration loaded from the environment
//!
//! This module provides the listen address configuration for the blog
//! service, with defaults suitable for local development.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::info;

/// Server configuration struct
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => 3000,
        };

        let config = Self { host, port };
        info!("Resolved server config: {}", config.bind_addr());
        Ok(config)
    }

    /// Render the address in `host:port` form for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
        }

        let config = ServerConfig::from_env().expect("Failed to create server config");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        unsafe {
            env::set_var("HOST", "127.0.0.1");
            env::set_var("PORT", "8080");
        }

        let config = ServerConfig::from_env().expect("Failed to create server config");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);

        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_server_config_invalid_port() {
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        let result = ServerConfig::from_env();
        assert!(result.is_err());

        unsafe {
            env::remove_var("PORT");
        }
    }
}
