//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `error_handling` - Boundary language and retry/timeout defaults
//! - `server` - HTTP server configuration

pub mod environment;
pub mod error_handling;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use error_handling::ErrorHandlingConfig;
pub use server::ServerConfig;

/// Configuration loading failures
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Value out of range for {key}: {reason}")]
    OutOfRange { key: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Error handling configuration
    #[serde(default)]
    pub errors: ErrorHandlingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            errors: ErrorHandlingConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
        })
    }
}
