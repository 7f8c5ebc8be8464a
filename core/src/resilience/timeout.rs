//! Bounded wait on an in-flight operation

use std::future::Future;
use std::time::Duration;

use serde_json::json;
use tl_shared::types::Language;

use super::saturating_millis;
use crate::errors::{AppError, ErrorKind};
use crate::i18n::{self, Template};

/// Race `operation` against a timer.
///
/// The operation runs as its own task, so when the timer wins it is
/// abandoned rather than cancelled: it keeps running and its eventual result
/// is discarded. If the operation settles first, its own `Ok` or `Err` is the
/// outcome. A timeout yields `TIMEOUT_ERROR` (408) carrying `message`, or
/// "Operation timed out after {timeout}ms" when none is given.
pub async fn with_timeout<F, T, E>(
    operation: F,
    timeout: Duration,
    message: Option<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<AppError> + Send + 'static,
{
    let handle = tokio::spawn(operation);

    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "Guarded operation did not complete");
            Err(AppError::new(ErrorKind::InternalError)
                .with_details(json!({ "cause": join_error.to_string() }))
                .non_operational()
                .into())
        }
        Err(_) => {
            let timeout_ms = saturating_millis(timeout);
            let message = message.unwrap_or_else(|| {
                i18n::render(Template::Timeout, Language::PRIMARY, "timeout", timeout_ms)
            });
            tracing::warn!(timeout_ms, "Operation timed out, abandoning it");

            Err(AppError::new(ErrorKind::TimeoutError)
                .with_message(message)
                .with_details(json!({ "timeout_ms": timeout_ms }))
                .into())
        }
    }
}
