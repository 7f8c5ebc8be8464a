//! Resilience primitives wrapped around caller-supplied async operations.
//!
//! - `timeout` - race an operation against a deadline
//! - `retry` - sequential attempts with exponential backoff
//!
//! Neither primitive touches a response sink; failures come back as values.

use std::time::Duration;

pub mod retry;
pub mod timeout;

pub use retry::{retry_transient, with_retry, with_retry_when, RetryPolicy};
pub use timeout::with_timeout;

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
pub(crate) fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
