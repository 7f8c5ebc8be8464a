//! HTTP route handlers
//!
//! - `system` - health, API info and the fallback for unknown routes
//! - `errors` - the localized error catalog clients use to render failures

pub mod errors;
pub mod system;
