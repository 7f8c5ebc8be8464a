//! Error handling at the HTTP boundary
//!
//! - `boundary` - framework-independent classification, logging and sink write
//! - `error` - actix-web adapter: language negotiation, response sink, `ResponseError`

pub mod boundary;
pub mod error;

pub use boundary::{
    classify, handle_boundary_error, handle_boundary_error_with_stack, Classification, ResponseSink,
};
pub use error::{request_context, request_language, BoundaryError, HttpResponseSink};
