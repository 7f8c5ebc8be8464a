//! Shared error response structure
//!
//! `ErrorResponse` is the only shape a failure takes once it crosses a
//! service boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message (localized)
    pub error: String,

    /// Symbolic error code for client identification
    pub code: String,

    /// Additional diagnostic context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// When the error was reported, not when it happened
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response stamped with the current instant
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach diagnostic details, replacing any already present
    pub fn with_details(mut self, details: Option<serde_json::Value>) -> Self {
        self.details = details;
        self
    }

    /// Timestamp rendered the way it appears on the wire
    pub fn timestamp_iso(&self) -> String {
        iso_millis::format(&self.timestamp)
    }
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-19T08:30:00.125Z`
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(timestamp))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
