//! Application factory
//!
//! Routes are registered through `configure` so the binary and the
//! integration tests build the same application.

use actix_web::web;

use crate::routes::{errors, system};

/// Register every route and the fallback handler
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(system::health_check))
        .service(
            web::scope("/api/v1")
                .route("/", web::get().to(system::api_info))
                .route("/errors", web::get().to(errors::list_errors))
                .route("/errors/{code}", web::get().to(errors::get_error)),
        )
        .default_service(web::route().to(system::not_found));
}
