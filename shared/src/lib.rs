//! Shared utilities and common types for the Tradelog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The `ErrorResponse` wire structure
//! - Language negotiation for localized messages

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, ErrorHandlingConfig, LoggingConfig, ServerConfig};
pub use errors::{ErrorResponse, IntoErrorResponse};
pub use types::Language;
