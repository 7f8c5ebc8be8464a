use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use tl_core::errors::{localized_not_found_error, ErrorKind};
use tl_core::i18n;
use tl_shared::types::Language;

use crate::handlers::{request_language, BoundaryError};

/// One catalog row
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub status: u16,
    pub message: &'static str,
    pub retryable: bool,
}

impl CatalogEntry {
    pub fn new(kind: ErrorKind, lang: Language) -> Self {
        Self {
            code: kind.code(),
            status: kind.status_code(),
            message: i18n::localized_message(kind, lang),
            retryable: kind.is_retryable(),
        }
    }
}

/// GET /api/v1/errors
pub async fn list_errors(req: HttpRequest) -> HttpResponse {
    let lang = request_language(&req);
    let entries: Vec<CatalogEntry> = ErrorKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry::new(kind, lang))
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "language": lang,
        "errors": entries,
    }))
}

/// GET /api/v1/errors/{code}
pub async fn get_error(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, BoundaryError> {
    let lang = request_language(&req);
    let code = path.into_inner();

    match code.parse::<ErrorKind>() {
        Ok(kind) => Ok(HttpResponse::Ok().json(CatalogEntry::new(kind, lang))),
        Err(_) => {
            tracing::debug!(%code, "Catalog lookup for unknown code");
            let error = localized_not_found_error(&code, lang);
            Err(BoundaryError::from_request(error, &req))
        }
    }
}
