//! Translation of third-party faults into the internal taxonomy.
//!
//! Unknown codes and statuses never fail: they land in a generic bucket for
//! their table, keeping the original message when there is one.

use serde::Deserialize;
use serde_json::json;

use crate::errors::{AppError, ErrorKind};

/// Error reported by the backend service (auth, document store)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendFault {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BackendFault {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Error raised by an HTTP call to an external API such as the AI provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExternalApiFault {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<UpstreamResponse>,
}

/// Response attached to an external API fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpstreamResponse {
    pub status: u16,
}

impl ExternalApiFault {
    pub fn from_status(status: u16) -> Self {
        Self {
            message: None,
            response: Some(UpstreamResponse { status }),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.response.map(|r| r.status)
    }
}

/// Backend codes, matched exactly and case-sensitively
const BACKEND_CODES: &[(&str, ErrorKind)] = &[
    ("auth/invalid-credential", ErrorKind::AuthRequired),
    ("auth/invalid-login-credentials", ErrorKind::AuthRequired),
    ("auth/user-not-found", ErrorKind::AuthRequired),
    ("auth/wrong-password", ErrorKind::AuthRequired),
    ("auth/too-many-requests", ErrorKind::RateLimitExceeded),
    ("permission-denied", ErrorKind::InsufficientPermissions),
    ("not-found", ErrorKind::ResourceNotFound),
    ("already-exists", ErrorKind::DuplicateResource),
];

fn backend_kind(code: &str) -> Option<ErrorKind> {
    BACKEND_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, kind)| *kind)
}

/// Map a backend-service fault by its string code
pub fn map_backend_error(fault: &BackendFault) -> AppError {
    let code = fault.code.as_deref();

    match code.and_then(backend_kind) {
        Some(kind) => {
            AppError::new(kind).with_details(json!({ "source_code": code }))
        }
        None => {
            tracing::debug!(code = ?code, "Unrecognized backend error code");
            let error = AppError::new(ErrorKind::DatabaseError);
            let error = match fault.message.as_deref() {
                Some(message) => error.with_message(message),
                None => error,
            };
            match code {
                Some(code) => error.with_details(json!({ "source_code": code })),
                None => error,
            }
        }
    }
}

/// Map an external API fault by the status of its HTTP response
pub fn map_external_api_error(fault: &ExternalApiFault) -> AppError {
    let status = fault.status();

    let error = match status {
        Some(401) => AppError::new(ErrorKind::AiServiceError).with_status(500),
        Some(429) => AppError::new(ErrorKind::RateLimitExceeded).with_status(500),
        Some(s) if s >= 500 => AppError::new(ErrorKind::ServiceUnavailable).with_status(503),
        _ => {
            let error = AppError::new(ErrorKind::AiServiceError).with_status(500);
            match fault.message.as_deref() {
                Some(message) => error.with_message(message),
                None => error,
            }
        }
    };

    match status {
        Some(status) => error.with_details(json!({ "upstream_status": status })),
        None => error,
    }
}
