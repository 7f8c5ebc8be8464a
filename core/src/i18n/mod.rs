//! Localized default messages for every [`ErrorKind`].
//!
//! English is total; other languages are looked up through `Option` and fall
//! back to English when an entry is missing.

use std::collections::HashMap;

use crate::errors::ErrorKind;
use tl_shared::types::Language;

/// Templates with `{placeholder}` parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `{resource}`
    NotFound,
    /// `{timeout}` in milliseconds
    Timeout,
}

/// Per-language message table; `None` marks a missing entry
type Table = fn(ErrorKind) -> Option<&'static str>;

/// Default message for `kind` in `lang`, falling back to the primary language
pub fn localized_message(kind: ErrorKind, lang: Language) -> &'static str {
    lookup(kind, table(lang))
}

fn lookup(kind: ErrorKind, table: Table) -> &'static str {
    table(kind).unwrap_or_else(|| english(kind))
}

/// Template text for `lang`, falling back to the primary language
pub fn template(template: Template, lang: Language) -> &'static str {
    match (template, lang) {
        (Template::NotFound, Language::English) => "{resource} not found",
        (Template::NotFound, Language::Portuguese) => "{resource}: não encontrado(a)",
        (Template::Timeout, Language::English) => "Operation timed out after {timeout}ms",
        (Template::Timeout, Language::Portuguese) => "A operação excedeu o tempo limite de {timeout}ms",
    }
}

/// Replace every `{key}` in `template` with its value from `params`
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Render a template with a single parameter
pub fn render(template_kind: Template, lang: Language, key: &str, value: impl ToString) -> String {
    let mut params = HashMap::new();
    params.insert(key, value.to_string());
    format_message(template(template_kind, lang), &params)
}

fn table(lang: Language) -> Table {
    match lang {
        Language::English => |kind| Some(english(kind)),
        Language::Portuguese => portuguese,
    }
}

fn english(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::AuthRequired => "Authentication required",
        ErrorKind::AuthInvalid => "Invalid authentication credentials",
        ErrorKind::AuthExpired => "Authentication session has expired",
        ErrorKind::InsufficientPermissions => "You do not have permission to perform this action",
        ErrorKind::ValidationError => "Validation error",
        ErrorKind::MissingRequiredField => "A required field is missing",
        ErrorKind::InvalidInput => "Invalid input",
        ErrorKind::InvalidFileType => "Invalid file type",
        ErrorKind::FileTooLarge => "File is too large",
        ErrorKind::ResourceNotFound => "Resource not found",
        ErrorKind::TradeNotFound => "Trade not found",
        ErrorKind::ImportNotFound => "Import not found",
        ErrorKind::UserNotFound => "User not found",
        ErrorKind::DuplicateResource => "Resource already exists",
        ErrorKind::OperationNotAllowed => "Operation not allowed",
        ErrorKind::RateLimitExceeded => "Too many requests. Please try again later",
        ErrorKind::QuotaExceeded => "Quota exceeded",
        ErrorKind::CsvParseError => "Failed to parse CSV file",
        ErrorKind::CsvValidationError => "CSV file contains invalid data",
        ErrorKind::ImportFailed => "Import failed",
        ErrorKind::BulkOperationFailed => "Bulk operation failed",
        ErrorKind::AiServiceError => "AI service error",
        ErrorKind::DatabaseError => "Database error",
        ErrorKind::StorageError => "Storage error",
        ErrorKind::InternalError => "An internal error occurred",
        ErrorKind::ServiceUnavailable => "Service temporarily unavailable",
        ErrorKind::TimeoutError => "The operation timed out",
        ErrorKind::NetworkError => "Network error",
    }
}

// Complete today; new kinds may land here after their English entry.
fn portuguese(kind: ErrorKind) -> Option<&'static str> {
    let message = match kind {
        ErrorKind::AuthRequired => "Autenticação necessária",
        ErrorKind::AuthInvalid => "Credenciais de autenticação inválidas",
        ErrorKind::AuthExpired => "A sessão de autenticação expirou",
        ErrorKind::InsufficientPermissions => "Você não tem permissão para realizar esta ação",
        ErrorKind::ValidationError => "Erro de validação",
        ErrorKind::MissingRequiredField => "Um campo obrigatório está faltando",
        ErrorKind::InvalidInput => "Entrada inválida",
        ErrorKind::InvalidFileType => "Tipo de arquivo inválido",
        ErrorKind::FileTooLarge => "O arquivo é muito grande",
        ErrorKind::ResourceNotFound => "Recurso não encontrado",
        ErrorKind::TradeNotFound => "Operação não encontrada",
        ErrorKind::ImportNotFound => "Importação não encontrada",
        ErrorKind::UserNotFound => "Usuário não encontrado",
        ErrorKind::DuplicateResource => "O recurso já existe",
        ErrorKind::OperationNotAllowed => "Operação não permitida",
        ErrorKind::RateLimitExceeded => "Muitas requisições. Tente novamente mais tarde",
        ErrorKind::QuotaExceeded => "Cota excedida",
        ErrorKind::CsvParseError => "Falha ao processar o arquivo CSV",
        ErrorKind::CsvValidationError => "O arquivo CSV contém dados inválidos",
        ErrorKind::ImportFailed => "A importação falhou",
        ErrorKind::BulkOperationFailed => "A operação em lote falhou",
        ErrorKind::AiServiceError => "Erro no serviço de IA",
        ErrorKind::DatabaseError => "Erro no banco de dados",
        ErrorKind::StorageError => "Erro de armazenamento",
        ErrorKind::InternalError => "Ocorreu um erro interno",
        ErrorKind::ServiceUnavailable => "Serviço temporariamente indisponível",
        ErrorKind::TimeoutError => "A operação excedeu o tempo limite",
        ErrorKind::NetworkError => "Erro de rede",
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_every_language() {
        for kind in ErrorKind::ALL {
            for lang in Language::ALL {
                assert!(table(lang)(kind).is_some(), "{} missing for {}", kind, lang);
                assert!(!localized_message(kind, lang).is_empty());
            }
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_eq!(localized_message(ErrorKind::UserNotFound, Language::English), "User not found");
        assert_eq!(
            localized_message(ErrorKind::UserNotFound, Language::Portuguese),
            "Usuário não encontrado"
        );
    }

    #[test]
    fn test_missing_entry_falls_back_to_english() {
        let partial: Table = |kind| match kind {
            ErrorKind::AuthRequired => Some("Autenticação necessária"),
            _ => None,
        };
        assert_eq!(lookup(ErrorKind::AuthRequired, partial), "Autenticação necessária");
        assert_eq!(lookup(ErrorKind::QuotaExceeded, partial), "Quota exceeded");
        assert_eq!(lookup(ErrorKind::NetworkError, |_| None), "Network error");
    }

    #[test]
    fn test_format_message() {
        let mut params = HashMap::new();
        params.insert("resource", "Trade".to_string());
        params.insert("id", "42".to_string());
        assert_eq!(format_message("{resource} #{id} missing", &params), "Trade #42 missing");
        assert_eq!(format_message("no placeholders", &params), "no placeholders");
    }

    #[test]
    fn test_render_templates() {
        assert_eq!(
            render(Template::NotFound, Language::English, "resource", "Trade"),
            "Trade not found"
        );
        assert_eq!(
            render(Template::NotFound, Language::Portuguese, "resource", "Trade"),
            "Trade: não encontrado(a)"
        );
        assert_eq!(
            render(Template::Timeout, Language::English, "timeout", 50),
            "Operation timed out after 50ms"
        );
    }
}
