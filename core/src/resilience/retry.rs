//! Retry with exponential backoff for transient failures

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tl_shared::config::ErrorHandlingConfig;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use super::saturating_millis;
use crate::errors::AppError;

/// How many times to attempt an operation and how long to wait in between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; zero behaves like one
    pub max_retries: u32,
    /// Wait after the first failure; doubles after each later one
    pub base_delay: Duration,
    /// Label attached to every log line
    pub context: Option<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            context: None,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            context: None,
        }
    }

    pub fn from_config(config: &ErrorHandlingConfig) -> Self {
        Self::new(config.max_retries, config.base_delay())
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Number of invocations the loop may make
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Wait after failed `attempt` (1-indexed): `base_delay * 2^(attempt - 1)`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }

    fn label(&self) -> &str {
        self.context.as_deref().unwrap_or("operation")
    }
}

/// Attempt `operation` until it succeeds or the policy's attempts run out.
///
/// Attempts are strictly sequential. The last failure is returned unchanged.
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    with_retry_when(policy, operation, |_| true).await
}

/// Like [`with_retry`], but stops early when `should_retry` rejects a failure
pub async fn with_retry_when<F, Fut, T, E, P>(
    policy: &RetryPolicy,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    P: Fn(&E) -> bool,
{
    let attempts = policy.attempts();
    let context = policy.label();
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(context, attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if attempt >= attempts => {
                error!(context, attempts, error = %err, "Operation failed after all attempts");
                return Err(err);
            }
            Err(err) if !should_retry(&err) => {
                debug!(context, attempt, error = %err, "Failure is not retryable");
                return Err(err);
            }
            Err(err) => {
                let delay = policy.backoff_delay(attempt);
                warn!(
                    context,
                    attempt,
                    delay_ms = saturating_millis(delay),
                    error = %err,
                    "Attempt failed, retrying"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Retry only failures whose kind is transient
pub async fn retry_transient<F, Fut, T>(policy: &RetryPolicy, operation: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    with_retry_when(policy, operation, |err: &AppError| err.kind().is_retryable()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(1000));
        assert!(policy.context.is_none());
    }

    #[test]
    fn test_backoff_is_pure_exponential() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(400));
        assert_eq!(policy.backoff_delay(4), Duration::from_millis(800));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(100, Duration::MAX);
        assert_eq!(policy.backoff_delay(3), Duration::MAX);
        assert_eq!(policy.backoff_delay(80), Duration::MAX);
    }

    #[test]
    fn test_from_config() {
        let config = ErrorHandlingConfig {
            max_retries: 5,
            base_delay_ms: 250,
            ..Default::default()
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_two_failures() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::from_millis(10)).with_context("fetch trades");
        let started = Instant::now();

        let result: Result<&str, AppError> = with_retry(&policy, || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if call < 3 {
                    Err(AppError::new(ErrorKind::NetworkError))
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_stops_at_max() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::from_millis(10));

        let result: Result<(), String> = with_retry(&policy, || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("attempt {} failed", call)) }
        })
        .await;

        assert_eq!(result.unwrap_err(), "attempt 3 failed");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_success_makes_no_further_attempts() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<u8, String> = with_retry(&RetryPolicy::default(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(7) }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(&RetryPolicy::new(0, Duration::from_millis(10)), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("nope".to_string()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_transient_stops_on_permanent_failure() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(5, Duration::from_millis(10));

        let result: Result<(), AppError> = retry_transient(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::new(ErrorKind::ValidationError)) }
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), ErrorKind::ValidationError);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_transient_retries_timeouts() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(4, Duration::from_millis(10));

        let result: Result<(), AppError> = retry_transient(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::new(ErrorKind::TimeoutError)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
