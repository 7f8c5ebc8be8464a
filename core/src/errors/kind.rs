//! Closed failure taxonomy

use serde::{Deserialize, Serialize};

/// Failure category carried by every [`AppError`](super::AppError).
///
/// Each kind has a stable symbolic code (what clients see in the `code`
/// field) and one canonical HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    // Authentication
    AuthRequired,
    AuthInvalid,
    AuthExpired,

    // Authorization
    InsufficientPermissions,

    // Validation
    ValidationError,
    MissingRequiredField,
    InvalidInput,
    InvalidFileType,
    FileTooLarge,

    // Resource lookup
    ResourceNotFound,
    TradeNotFound,
    ImportNotFound,
    UserNotFound,

    // Business rules
    DuplicateResource,
    OperationNotAllowed,
    RateLimitExceeded,
    QuotaExceeded,

    // Import and bulk processing
    CsvParseError,
    CsvValidationError,
    ImportFailed,
    BulkOperationFailed,

    // External services
    AiServiceError,
    DatabaseError,
    StorageError,

    // Generic
    InternalError,
    ServiceUnavailable,
    TimeoutError,
    NetworkError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 28] = [
        ErrorKind::AuthRequired,
        ErrorKind::AuthInvalid,
        ErrorKind::AuthExpired,
        ErrorKind::InsufficientPermissions,
        ErrorKind::ValidationError,
        ErrorKind::MissingRequiredField,
        ErrorKind::InvalidInput,
        ErrorKind::InvalidFileType,
        ErrorKind::FileTooLarge,
        ErrorKind::ResourceNotFound,
        ErrorKind::TradeNotFound,
        ErrorKind::ImportNotFound,
        ErrorKind::UserNotFound,
        ErrorKind::DuplicateResource,
        ErrorKind::OperationNotAllowed,
        ErrorKind::RateLimitExceeded,
        ErrorKind::QuotaExceeded,
        ErrorKind::CsvParseError,
        ErrorKind::CsvValidationError,
        ErrorKind::ImportFailed,
        ErrorKind::BulkOperationFailed,
        ErrorKind::AiServiceError,
        ErrorKind::DatabaseError,
        ErrorKind::StorageError,
        ErrorKind::InternalError,
        ErrorKind::ServiceUnavailable,
        ErrorKind::TimeoutError,
        ErrorKind::NetworkError,
    ];

    /// Symbolic code exposed on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::AuthRequired => "AUTH_REQUIRED",
            ErrorKind::AuthInvalid => "AUTH_INVALID",
            ErrorKind::AuthExpired => "AUTH_EXPIRED",
            ErrorKind::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            ErrorKind::ValidationError => "VALIDATION_ERROR",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::InvalidFileType => "INVALID_FILE_TYPE",
            ErrorKind::FileTooLarge => "FILE_TOO_LARGE",
            ErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorKind::TradeNotFound => "TRADE_NOT_FOUND",
            ErrorKind::ImportNotFound => "IMPORT_NOT_FOUND",
            ErrorKind::UserNotFound => "USER_NOT_FOUND",
            ErrorKind::DuplicateResource => "DUPLICATE_RESOURCE",
            ErrorKind::OperationNotAllowed => "OPERATION_NOT_ALLOWED",
            ErrorKind::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ErrorKind::QuotaExceeded => "QUOTA_EXCEEDED",
            ErrorKind::CsvParseError => "CSV_PARSE_ERROR",
            ErrorKind::CsvValidationError => "CSV_VALIDATION_ERROR",
            ErrorKind::ImportFailed => "IMPORT_FAILED",
            ErrorKind::BulkOperationFailed => "BULK_OPERATION_FAILED",
            ErrorKind::AiServiceError => "AI_SERVICE_ERROR",
            ErrorKind::DatabaseError => "DATABASE_ERROR",
            ErrorKind::StorageError => "STORAGE_ERROR",
            ErrorKind::InternalError => "INTERNAL_ERROR",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorKind::TimeoutError => "TIMEOUT_ERROR",
            ErrorKind::NetworkError => "NETWORK_ERROR",
        }
    }

    /// Canonical HTTP status for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::AuthRequired | ErrorKind::AuthInvalid | ErrorKind::AuthExpired => 401,

            ErrorKind::InsufficientPermissions | ErrorKind::OperationNotAllowed => 403,

            ErrorKind::ValidationError
            | ErrorKind::MissingRequiredField
            | ErrorKind::InvalidInput
            | ErrorKind::InvalidFileType
            | ErrorKind::FileTooLarge
            | ErrorKind::CsvParseError
            | ErrorKind::CsvValidationError => 400,

            ErrorKind::ResourceNotFound
            | ErrorKind::TradeNotFound
            | ErrorKind::ImportNotFound
            | ErrorKind::UserNotFound => 404,

            ErrorKind::TimeoutError => 408,
            ErrorKind::DuplicateResource => 409,
            ErrorKind::RateLimitExceeded | ErrorKind::QuotaExceeded => 429,

            ErrorKind::ServiceUnavailable | ErrorKind::NetworkError => 503,

            ErrorKind::ImportFailed
            | ErrorKind::BulkOperationFailed
            | ErrorKind::AiServiceError
            | ErrorKind::DatabaseError
            | ErrorKind::StorageError
            | ErrorKind::InternalError => 500,
        }
    }

    /// Transient failures worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::TimeoutError
                | ErrorKind::NetworkError
                | ErrorKind::ServiceUnavailable
                | ErrorKind::RateLimitExceeded
                | ErrorKind::DatabaseError
                | ErrorKind::StorageError
                | ErrorKind::AiServiceError
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| format!("Unknown error kind: {}", s))
    }
}
