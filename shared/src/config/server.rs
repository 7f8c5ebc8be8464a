//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
            keep_alive: default_keep_alive(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Read `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var("SERVER_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("SERVER_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port,
            })?;
        }
        if let Ok(workers) = env::var("SERVER_WORKERS") {
            config.workers = workers.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_WORKERS",
                value: workers,
            })?;
        }

        Ok(config)
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75 // 75 seconds
}
