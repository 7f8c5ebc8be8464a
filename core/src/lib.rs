//! # Tradelog Core
//!
//! Failure taxonomy and resilience layer for the Tradelog backend.
//! This crate classifies failures into a closed set of kinds, localizes their
//! default messages, maps third-party faults onto that taxonomy and provides
//! the timeout and retry wrappers used around external calls.

pub mod errors;
pub mod i18n;
pub mod mapping;
pub mod resilience;

// Re-export commonly used types for convenience
pub use errors::*;
pub use mapping::{map_backend_error, map_external_api_error, BackendFault, ExternalApiFault};
pub use resilience::{retry_transient, with_retry, with_retry_when, with_timeout, RetryPolicy};
