//! Error handling and resilience configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use super::ConfigError;
use crate::types::Language;

/// Defaults used by the error boundary and the retry helpers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorHandlingConfig {
    /// Language used when a request carries no usable preference
    #[serde(default)]
    pub default_language: Language,

    /// Maximum attempts made by a retry loop, first attempt included
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the second attempt; doubles for every later attempt
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Include stack traces when logging boundary errors
    #[serde(default = "default_log_stack_traces")]
    pub log_stack_traces: bool,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            default_language: Language::PRIMARY,
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            log_stack_traces: default_log_stack_traces(),
        }
    }
}

impl ErrorHandlingConfig {
    /// Load overrides from `DEFAULT_LANGUAGE`, `RETRY_MAX_ATTEMPTS`,
    /// `RETRY_BASE_DELAY_MS` and `LOG_STACK_TRACES`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(lang) = env::var("DEFAULT_LANGUAGE") {
            config.default_language = lang.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEFAULT_LANGUAGE",
                value: lang,
            })?;
        }
        if let Some(value) = parse_var::<u32>("RETRY_MAX_ATTEMPTS")? {
            config.max_retries = value;
        }
        if let Some(value) = parse_var::<u64>("RETRY_BASE_DELAY_MS")? {
            config.base_delay_ms = value;
        }
        if let Some(value) = parse_var::<bool>("LOG_STACK_TRACES")? {
            config.log_stack_traces = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the retry helpers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_retries == 0 {
            return Err(ConfigError::OutOfRange {
                key: "RETRY_MAX_ATTEMPTS",
                reason: "at least one attempt is required".to_string(),
            });
        }
        Ok(())
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_log_stack_traces() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ErrorHandlingConfig::default();
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.base_delay(), Duration::from_secs(1));
        assert!(config.log_stack_traces);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = ErrorHandlingConfig {
            max_retries: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { key: "RETRY_MAX_ATTEMPTS", .. })
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ErrorHandlingConfig =
            serde_json::from_str(r#"{"default_language": "pt", "base_delay_ms": 250}"#).unwrap();
        assert_eq!(config.default_language, Language::Portuguese);
        assert_eq!(config.base_delay_ms, 250);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_stack_trace_flag_parses_bool() {
        let config: ErrorHandlingConfig =
            serde_json::from_str(r#"{"log_stack_traces": false}"#).unwrap();
        assert!(!config.log_stack_traces);
        assert!(config.validate().is_ok());
    }
}
