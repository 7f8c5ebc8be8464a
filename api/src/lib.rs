//! # Tradelog API
//!
//! HTTP boundary: converts failures into localized `ErrorResponse`s.

pub mod app;
pub mod handlers;
pub mod routes;
pub mod telemetry;
