use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;
use tl_core::errors::AppError;
use tl_shared::config::ErrorHandlingConfig;
use tl_shared::errors::ErrorResponse;
use tl_shared::types::Language;

use super::boundary::{classify, handle_boundary_error_with_stack, ResponseSink};

fn error_config(req: &HttpRequest) -> Option<&ErrorHandlingConfig> {
    req.app_data::<web::Data<ErrorHandlingConfig>>()
        .map(|config| config.get_ref())
}

/// Detect language preference from the Accept-Language header.
///
/// Requests without the header use the configured default language.
pub fn request_language(req: &HttpRequest) -> Language {
    let fallback = error_config(req)
        .map(|config| config.default_language)
        .unwrap_or(Language::PRIMARY);

    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(Language::from_accept_language)
        .unwrap_or(fallback)
}

/// Context label for logs, e.g. "GET /api/v1/trades"
pub fn request_context(req: &HttpRequest) -> String {
    format!("{} {}", req.method(), req.path())
}

/// Sink that turns the boundary's single write into an actix response
#[derive(Default)]
pub struct HttpResponseSink {
    response: Option<HttpResponse>,
}

impl ResponseSink for HttpResponseSink {
    fn send(&mut self, status: u16, body: ErrorResponse) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.response = Some(HttpResponse::build(status).json(body));
    }
}

impl HttpResponseSink {
    pub fn into_response(self) -> HttpResponse {
        self.response
            .unwrap_or_else(|| HttpResponse::InternalServerError().finish())
    }
}

/// Error returned from handlers; rendered through the boundary
pub struct BoundaryError {
    error: anyhow::Error,
    context: String,
    language: Language,
    log_stack: bool,
}

impl BoundaryError {
    /// Attach the request's context label and negotiated language
    pub fn from_request(error: impl Into<anyhow::Error>, req: &HttpRequest) -> Self {
        Self {
            error: error.into(),
            context: request_context(req),
            language: request_language(req),
            log_stack: error_config(req).map_or(true, |config| config.log_stack_traces),
        }
    }

    pub fn inner(&self) -> &anyhow::Error {
        &self.error
    }
}

impl From<AppError> for BoundaryError {
    fn from(error: AppError) -> Self {
        Self::from(anyhow::Error::new(error))
    }
}

impl From<anyhow::Error> for BoundaryError {
    fn from(error: anyhow::Error) -> Self {
        Self {
            error,
            context: String::from("unknown"),
            language: Language::PRIMARY,
            log_stack: true,
        }
    }
}

impl fmt::Debug for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryError")
            .field("context", &self.context)
            .field("language", &self.language)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for BoundaryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(classify(&self.error, self.language).status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let mut sink = HttpResponseSink::default();
        handle_boundary_error_with_stack(
            &self.error,
            &mut sink,
            &self.context,
            self.language,
            self.log_stack,
        );
        sink.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use tl_core::errors::ErrorKind;

    #[test]
    fn test_language_detection_portuguese() {
        let req = TestRequest::default()
            .insert_header(("Accept-Language", "pt-BR,pt;q=0.9,en-US;q=0.8"))
            .to_http_request();
        assert_eq!(request_language(&req), Language::Portuguese);
    }

    #[test]
    fn test_language_detection_english() {
        let req = TestRequest::default()
            .insert_header(("Accept-Language", "en-US,en;q=0.9,pt-BR;q=0.8"))
            .to_http_request();
        assert_eq!(request_language(&req), Language::English);
    }

    #[test]
    fn test_language_detection_default() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(request_language(&req), Language::English);
    }

    #[test]
    fn test_language_detection_uses_configured_default() {
        let config = ErrorHandlingConfig {
            default_language: Language::Portuguese,
            ..Default::default()
        };
        let req = TestRequest::default()
            .app_data(web::Data::new(config))
            .to_http_request();
        assert_eq!(request_language(&req), Language::Portuguese);
    }

    #[test]
    fn test_request_context() {
        let req = TestRequest::post().uri("/api/v1/imports?dry=1").to_http_request();
        assert_eq!(request_context(&req), "POST /api/v1/imports");
    }

    #[test]
    fn test_boundary_error_status() {
        let error = BoundaryError::from(AppError::new(ErrorKind::DuplicateResource));
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_stack_logging_follows_config() {
        let req = TestRequest::default().to_http_request();
        assert!(BoundaryError::from_request(anyhow::anyhow!("boom"), &req).log_stack);

        let config = ErrorHandlingConfig {
            log_stack_traces: false,
            ..Default::default()
        };
        let req = TestRequest::default()
            .app_data(web::Data::new(config))
            .to_http_request();
        let error = BoundaryError::from_request(anyhow::anyhow!("boom"), &req);
        assert!(!error.log_stack);
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sink_without_write_is_internal_error() {
        let sink = HttpResponseSink::default();
        assert_eq!(sink.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_status_falls_back() {
        let mut sink = HttpResponseSink::default();
        sink.send(42, ErrorResponse::new("INTERNAL_ERROR", "odd status"));
        assert_eq!(sink.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
