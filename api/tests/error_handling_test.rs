//! Integration tests for the HTTP error boundary

use actix_web::{http::StatusCode, test, web, App, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use tl_api::handlers::BoundaryError;
use tl_core::errors::{validation_error, AppError, ErrorKind};
use tl_core::mapping::{map_backend_error, map_external_api_error, BackendFault, ExternalApiFault};

async fn failing_with(req: HttpRequest, message: &'static str) -> Result<HttpResponse, BoundaryError> {
    Err(BoundaryError::from_request(anyhow::anyhow!(message), &req))
}

async fn permission_failure(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    failing_with(req, "Permission denied for journal 12").await
}

async fn internal_failure(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    failing_with(req, "connection reset by peer at db.rs:88").await
}

async fn invalid_trade(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    let error = validation_error(Some("Quantity must be positive"), Some(json!({"field": "quantity"})));
    Err(BoundaryError::from_request(error, &req))
}

async fn backend_failure(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    let fault = BackendFault::new("permission-denied").with_message("Missing or insufficient permissions.");
    Err(BoundaryError::from_request(map_backend_error(&fault), &req))
}

async fn upstream_failure(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    let error = map_external_api_error(&ExternalApiFault::from_status(502));
    Err(BoundaryError::from_request(error, &req))
}

async fn wrapped_failure(req: HttpRequest) -> Result<HttpResponse, BoundaryError> {
    let error = anyhow::Error::new(AppError::new(ErrorKind::CsvParseError))
        .context("while importing broker statement");
    Err(BoundaryError::from_request(error, &req))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .route("/permission", web::get().to(permission_failure))
                .route("/internal", web::get().to(internal_failure))
                .route("/trades", web::post().to(invalid_trade))
                .route("/backend", web::get().to(backend_failure))
                .route("/upstream", web::get().to(upstream_failure))
                .route("/import", web::post().to(wrapped_failure)),
        )
        .await
    };
}

fn assert_wire_shape(body: &Value) {
    assert!(body["error"].is_string());
    assert!(body["code"].is_string());
    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[actix_web::test]
async fn test_heuristic_match_keeps_raw_message() {
    let app = app!();
    let req = test::TestRequest::get().uri("/permission").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_wire_shape(&body);
    assert_eq!(body["code"], "INSUFFICIENT_PERMISSIONS");
    assert_eq!(body["error"], "Permission denied for journal 12");
}

#[actix_web::test]
async fn test_unrecognized_failure_hides_internals() {
    let app = app!();
    let req = test::TestRequest::get().uri("/internal").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_wire_shape(&body);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "An internal error occurred");
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn test_app_error_details_reach_client() {
    let app = app!();
    let req = test::TestRequest::post().uri("/trades").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_wire_shape(&body);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Quantity must be positive");
    assert_eq!(body["details"]["field"], "quantity");
}

#[actix_web::test]
async fn test_mapped_backend_fault() {
    let app = app!();
    let req = test::TestRequest::get().uri("/backend").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INSUFFICIENT_PERMISSIONS");
}

#[actix_web::test]
async fn test_mapped_upstream_outage() {
    let app = app!();
    let req = test::TestRequest::get().uri("/upstream").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}

#[actix_web::test]
async fn test_app_error_behind_context_is_found() {
    let app = app!();
    let req = test::TestRequest::post().uri("/import").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "CSV_PARSE_ERROR");
}
