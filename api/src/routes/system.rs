use actix_web::{HttpRequest, HttpResponse};
use tl_core::errors::{AppError, ErrorKind};

use crate::handlers::{request_language, BoundaryError};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tradelog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Tradelog API v1",
        "endpoints": {
            "health": "/health",
            "errors": {
                "list": {
                    "path": "/api/v1/errors",
                    "method": "GET",
                    "description": "Error catalog localized via Accept-Language (en, pt)"
                },
                "get": {
                    "path": "/api/v1/errors/{code}",
                    "method": "GET",
                    "description": "Single catalog entry by symbolic code",
                    "responses": {
                        "200": "Catalog entry",
                        "404": "Unknown error code"
                    }
                }
            }
        }
    }))
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    let error = AppError::localized(ErrorKind::ResourceNotFound, request_language(&req));
    Err(BoundaryError::from_request(error, &req))
}
