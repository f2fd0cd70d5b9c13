pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every failure other than a validation failure is reported to clients with a
/// single human-readable message. Internal details are only ever logged.
///
/// # JSON Example
///
/// ```json
/// { "mensagem": "Produto não encontrado." }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub mensagem: String,
}

impl ErrorResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the single place where failures are logged and turned into
/// responses. Server-side variants log their detail at error level and answer
/// with the generic `Erro interno no servidor` message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Request body is not a JSON object; the detail is logged, not returned
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Business validation failed; the payload is returned verbatim with 400
    #[error("Validation failed")]
    Validation(serde_json::Value),

    /// Resource missing; the message is returned with 404
    #[error("Not Found: {0}")]
    NotFound(String),

    /// The upstream service answered with an error status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The upstream service could not be reached or sent an unreadable answer
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// The error code used in logs for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::SerdeJson(_) => ErrorCode::SerdeJsonError,
            AppError::InvalidBody(_) => ErrorCode::InvalidJson,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Upstream(_) => ErrorCode::UpstreamError,
            AppError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match self {
            AppError::Validation(body) => {
                tracing::info!(error_code = code.code(), "Validation failed: {}", body);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::InvalidBody(detail) => {
                tracing::warn!(error_code = code.code(), "Invalid request body: {}", detail);
                error_response(StatusCode::BAD_REQUEST, code.default_message(), code)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                error_response(StatusCode::NOT_FOUND, msg, code)
            }
            other => {
                tracing::error!(
                    error_code = code.code(),
                    error = %code,
                    "Unexpected error: {}",
                    other
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code.default_message(),
                    code,
                )
            }
        }
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Produto não encontrado.",
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_code: ErrorCode,
) -> Response {
    let mut response = (status, Json(ErrorResponse::new(message))).into_response();
    response.extensions_mut().insert(error_code);
    response
}
