use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Rejection reasons produced while decoding a `POST /calcular-iva` body.
///
/// Checks run in a fixed order (body, presence, names, amount), so a request with
/// several problems always reports the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Body is not JSON, not parseable, or not a JSON object
    #[error("{0}")]
    MalformedBody(String),

    /// One or more required fields are absent
    #[error("Campos requeridos faltantes: {}", .missing.join(", "))]
    MissingFields {
        missing: Vec<&'static str>,
        required: &'static [&'static str],
    },

    #[error("nombreProducto debe ser una cadena no vacía")]
    InvalidProductName,

    #[error("tipoProducto debe ser una cadena no vacía")]
    InvalidCategory,

    #[error("valorSinIVA debe ser un número positivo")]
    InvalidNetAmount,
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Category key is not in the rate table
    #[error("Tipo de producto \"{category}\" no encontrado")]
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },

    /// No route matches the request path
    #[error("Endpoint no encontrado")]
    RouteNotFound { endpoints: &'static [&'static str] },

    #[error("Método no permitido para este endpoint")]
    MethodNotAllowed,

    /// Configuration errors
    #[error("Error de configuración: {0}")]
    Configuration(String),

    /// Anything unanticipated
    #[error("Error interno del servidor: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();

        let body = match self {
            AppError::Validation(ValidationError::MissingFields { required, .. }) => json!({
                "error": message,
                "campos_requeridos": required,
            }),
            AppError::CategoryNotFound { available, .. } => json!({
                "error": message,
                "tipos_disponibles": available,
            }),
            AppError::RouteNotFound { endpoints } => json!({
                "error": message,
                "endpoints_disponibles": endpoints,
            }),
            _ => json!({ "error": message }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::CategoryNotFound { .. } => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
