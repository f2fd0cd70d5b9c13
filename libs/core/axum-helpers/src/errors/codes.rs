//! Type-safe error codes for logs and metrics.
//!
//! Each error code includes:
//! - String representation (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default client-facing message
//!
//! Codes never reach response bodies; clients only see `mensagem`.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::messages;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed business validation
    ValidationError,

    /// Request body could not be read as a JSON object
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// No route matches the request
    RouteNotFound,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    // Upstream errors (2000-2999)
    /// The record store answered with an error status
    UpstreamError,

    /// The record store could not be reached or answered garbage
    UpstreamUnavailable,

    // JSON errors (5000s)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::UpstreamError => "UPSTREAM_ERROR",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Record store errors
    /// - 5000-5999: Serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::RouteNotFound => 1012,

            Self::UpstreamError => 2001,
            Self::UpstreamUnavailable => 2002,

            Self::SerdeJsonError => 5001,
        }
    }

    /// Get the default client-facing message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => messages::VALIDATION_FAILED,
            Self::InvalidJson => messages::INVALID_BODY,
            Self::NotFound => messages::NOT_FOUND_RESOURCE,
            Self::RouteNotFound => messages::NOT_FOUND_ROUTE,
            Self::InternalError
            | Self::UpstreamError
            | Self::UpstreamUnavailable
            | Self::SerdeJsonError => messages::INTERNAL_ERROR,
        }
    }

    /// Whether the error is the server's fault (logged at error level, 5xx)
    pub fn is_server_error(&self) -> bool {
        self.code() >= 2000 || matches!(self, Self::InternalError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
