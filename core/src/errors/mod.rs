//! Structured application errors.
//!
//! Construction never fails: a missing message resolves to the localized
//! default for the kind, and the status defaults to the kind's canonical one.

mod kind;


pub use kind::ErrorKind;

use serde_json::Value;
use thiserror::Error;
use tl_shared::errors::{ErrorResponse, IntoErrorResponse};
use tl_shared::types::Language;

use crate::i18n::{self, Template};

/// Canonical in-process failure value
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    status_code: u16,
    details: Option<Value>,
    is_operational: bool,
}

/// Optional overrides applied on top of a kind's defaults
#[derive(Debug, Clone, Default)]
pub struct ErrorOptions {
    pub message: Option<String>,
    pub status_code: Option<u16>,
    pub details: Option<Value>,
    pub is_operational: Option<bool>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error of `kind` with the primary-language default message
    pub fn new(kind: ErrorKind) -> Self {
        Self::localized(kind, Language::PRIMARY)
    }

    /// Error of `kind` with the default message for `lang`
    pub fn localized(kind: ErrorKind, lang: Language) -> Self {
        Self {
            kind,
            message: i18n::localized_message(kind, lang).to_string(),
            status_code: kind.status_code(),
            details: None,
            is_operational: true,
        }
    }

    /// Error of `kind` with every override from `options` applied
    pub fn with_options(kind: ErrorKind, options: ErrorOptions, lang: Language) -> Self {
        let mut error = Self::localized(kind, lang);
        if let Some(message) = options.message {
            error = error.with_message(message);
        }
        if let Some(status) = options.status_code {
            error = error.with_status(status);
        }
        error.details = options.details;
        if let Some(operational) = options.is_operational {
            error.is_operational = operational;
        }
        error
    }

    /// Replace the message; blank messages keep the default
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.message = message;
        }
        self
    }

    /// Override the status code derived from the kind
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Mark as a programming fault rather than an expected failure
    pub fn non_operational(mut self) -> Self {
        self.is_operational = false;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Wire representation stamped with the current instant
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.kind.code(), self.message.clone()).with_details(self.details.clone())
    }
}

impl IntoErrorResponse for AppError {
    fn to_error_response(&self) -> ErrorResponse {
        self.to_response()
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        ErrorResponse::new(error.kind.code(), error.message).with_details(error.details)
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        AppError::new(kind)
    }
}

/// Serialize a kind plus optional message and details without building an error first
pub fn create_error_response(
    kind: ErrorKind,
    message: Option<&str>,
    details: Option<Value>,
    lang: Language,
) -> ErrorResponse {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| i18n::localized_message(kind, lang));
    ErrorResponse::new(kind.code(), message).with_details(details)
}

fn build(kind: ErrorKind, message: Option<&str>, details: Option<Value>) -> AppError {
    let mut error = AppError::new(kind);
    if let Some(message) = message {
        error = error.with_message(message);
    }
    error.details = details;
    error
}

/// 401 `AUTH_REQUIRED`
pub fn auth_error(message: Option<&str>) -> AppError {
    build(ErrorKind::AuthRequired, message, None)
}

/// 400 `VALIDATION_ERROR`
pub fn validation_error(message: Option<&str>, details: Option<Value>) -> AppError {
    build(ErrorKind::ValidationError, message, details)
}

/// 404 `RESOURCE_NOT_FOUND` with message "`resource` not found"
pub fn not_found_error(resource: &str) -> AppError {
    localized_not_found_error(resource, Language::PRIMARY)
}

/// 404 `RESOURCE_NOT_FOUND` with the not-found template for `lang`
pub fn localized_not_found_error(resource: &str, lang: Language) -> AppError {
    AppError::localized(ErrorKind::ResourceNotFound, lang)
        .with_message(i18n::render(Template::NotFound, lang, "resource", resource))
}

/// 403 `INSUFFICIENT_PERMISSIONS`
pub fn forbidden_error(message: Option<&str>) -> AppError {
    build(ErrorKind::InsufficientPermissions, message, None)
}

/// 400 `CSV_PARSE_ERROR`
pub fn csv_parse_error(message: Option<&str>, details: Option<Value>) -> AppError {
    build(ErrorKind::CsvParseError, message, details)
}

/// 500 `IMPORT_FAILED`
pub fn import_error(message: Option<&str>, details: Option<Value>) -> AppError {
    build(ErrorKind::ImportFailed, message, details)
}

/// 429 `RATE_LIMIT_EXCEEDED`
pub fn rate_limit_error(message: Option<&str>) -> AppError {
    build(ErrorKind::RateLimitExceeded, message, None)
}
