use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Handler for unmatched routes.
///
/// Use this as the fallback handler of the top-level router.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message(),
        ErrorCode::RouteNotFound,
    )
}
