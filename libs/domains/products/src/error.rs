use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::ValidationResult;

pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Validation failed: {}", .0.erros.join("; "))]
    Validation(ValidationResult),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Record store answered {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Record store request failed: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(result) => match serde_json::to_value(&result) {
                Ok(body) => AppError::Validation(body),
                Err(e) => AppError::SerdeJson(e),
            },
            ProductError::NotFound(_) => AppError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            ProductError::Upstream { status, message } => {
                AppError::Upstream(format!("{}: {}", status, message))
            }
            ProductError::Transport(msg) => AppError::UpstreamUnavailable(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<reqwest::Error> for ProductError {
    fn from(err: reqwest::Error) -> Self {
        ProductError::Transport(err.to_string())
    }
}
