//! The single place where internal failures become outward-facing responses.
//!
//! Classification is lenient but the result is always a well-formed
//! `ErrorResponse`: no call here may panic out or leave the sink unwritten.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tl_core::errors::{AppError, ErrorKind};
use tl_core::i18n;
use tl_shared::errors::ErrorResponse;
use tl_shared::types::Language;

/// Destination for the one response written per boundary failure
pub trait ResponseSink {
    fn send(&mut self, status: u16, body: ErrorResponse);
}

/// Final shape of a failure before it is serialized
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status_code: u16,
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<Value>,
}

/// Message phrases recognized on errors that are not `AppError`s, checked in order
const MESSAGE_HEURISTICS: &[(&str, ErrorKind)] = &[
    ("Authentication", ErrorKind::AuthRequired),
    ("Permission", ErrorKind::InsufficientPermissions),
    ("Forbidden", ErrorKind::InsufficientPermissions),
    ("Not found", ErrorKind::ResourceNotFound),
    ("Validation", ErrorKind::ValidationError),
];

/// Decide status, kind, message and details for a caught error.
///
/// An `AppError` anywhere in the chain is used verbatim. Anything else is
/// sniffed for known phrases; unmatched errors become `INTERNAL_ERROR` with
/// the localized default message so raw internals never reach the client.
pub fn classify(error: &anyhow::Error, lang: Language) -> Classification {
    if let Some(app_error) = error.chain().find_map(|e| e.downcast_ref::<AppError>()) {
        return Classification {
            status_code: app_error.status_code(),
            kind: app_error.kind(),
            message: app_error.message().to_string(),
            details: app_error.details().cloned(),
        };
    }

    let raw = error.to_string();
    let matched = MESSAGE_HEURISTICS
        .iter()
        .find(|(phrase, _)| raw.contains(*phrase))
        .map(|(_, kind)| *kind);

    match matched {
        Some(kind) => Classification {
            status_code: kind.status_code(),
            kind,
            message: raw,
            details: None,
        },
        None => Classification {
            status_code: ErrorKind::InternalError.status_code(),
            kind: ErrorKind::InternalError,
            message: i18n::localized_message(ErrorKind::InternalError, lang).to_string(),
            details: None,
        },
    }
}

/// Classify `error`, log it once at error level, then write exactly one
/// response to `sink`.
pub fn handle_boundary_error<S>(error: &anyhow::Error, sink: &mut S, context: &str, lang: Language)
where
    S: ResponseSink + ?Sized,
{
    handle_boundary_error_with_stack(error, sink, context, lang, true)
}

/// [`handle_boundary_error`] with the `stack` log field switched on or off
pub fn handle_boundary_error_with_stack<S>(
    error: &anyhow::Error,
    sink: &mut S,
    context: &str,
    lang: Language,
    include_stack: bool,
) where
    S: ResponseSink + ?Sized,
{
    let classification = classify(error, lang);
    let body = ErrorResponse::new(classification.kind.code(), classification.message)
        .with_details(classification.details);

    // A misbehaving subscriber must not keep the response from being written.
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        log_failure(error, &body, context, include_stack)
    }));

    sink.send(classification.status_code, body);
}

fn log_failure(error: &anyhow::Error, body: &ErrorResponse, context: &str, include_stack: bool) {
    let details = body.details.as_ref().map(Value::to_string);
    let stack = include_stack.then(|| format!("{:?}", error));
    tracing::error!(
        context,
        code = %body.code,
        message = %body.error,
        details = details.as_deref().unwrap_or(""),
        stack = stack.as_deref().unwrap_or(""),
        timestamp = %body.timestamp_iso(),
        "Request failed"
    );
}
