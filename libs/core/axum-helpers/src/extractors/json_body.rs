//! Lenient JSON body extractor.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor that tolerates missing bodies and content types.
///
/// - An empty (or whitespace-only) body yields `T::default()`.
/// - Any other body is parsed as JSON whatever its `Content-Type`.
/// - A body that is not a JSON object, or does not deserialize into `T`, is rejected with
///   [`AppError::InvalidBody`] (400).
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Input { name: Option<String> }
///
/// async fn handler(JsonBody(input): JsonBody<Input>) -> String {
///     input.name.unwrap_or_default()
/// }
///
/// let app = Router::new().route("/", post(handler));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::InvalidBody(e.to_string()).into_response())?;

        if !value.is_object() {
            return Err(
                AppError::InvalidBody("expected a JSON object".to_string()).into_response(),
            );
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidBody(e.to_string()).into_response())
    }
}
