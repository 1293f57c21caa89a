//! Custom error types for the common library
//!
//! This module defines the error types shared by the in-memory stores and
//! the server configuration.

use thiserror::Error;

/// Custom error type for store operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The requested record does not exist
    #[error("record not found")]
    NotFound,
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed
    #[error("invalid configuration value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
