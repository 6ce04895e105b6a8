pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure for boundary (request validation) errors.
///
/// - `code`: Integer error code for logging/monitoring (e.g., 1002)
/// - `error`: Machine-readable error identifier (e.g., "INVALID_PATH_PARAM")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1002,
///   "error": "INVALID_PATH_PARAM",
///   "message": "Path parameter must be an integer",
///   "details": { "value": "abc" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors raised at the HTTP boundary before a request reaches a domain service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Invalid path parameter: {0}")]
    InvalidPathParam(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                // 400 for syntax, 415 for content type, 422 for shape mismatch
                (
                    e.status(),
                    ErrorCode::JsonExtraction.default_message().to_string(),
                    Some(json!(e.body_text())),
                    ErrorCode::JsonExtraction,
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::QueryExtraction.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (
                    e.status(),
                    ErrorCode::QueryExtraction.default_message().to_string(),
                    Some(json!(e.body_text())),
                    ErrorCode::QueryExtraction,
                )
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::PathExtraction.code(),
                    "Path extraction error: {:?}",
                    e
                );
                (
                    e.status(),
                    ErrorCode::PathExtraction.default_message().to_string(),
                    Some(json!(e.body_text())),
                    ErrorCode::PathExtraction,
                )
            }
            AppError::InvalidPathParam(value) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPathParam.code(),
                    value = %value,
                    "Invalid path parameter"
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::InvalidPathParam.default_message().to_string(),
                    Some(json!({ "value": value })),
                    ErrorCode::InvalidPathParam,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
        };

        error_response(status, message, details, code)
    }
}

/// Helper function to create error responses in the shared envelope.
pub fn error_response(
    status: StatusCode,
    message: String,
    details: Option<serde_json::Value>,
    error_code: ErrorCode,
) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_path_param_is_unprocessable() {
        let response = AppError::InvalidPathParam("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert_eq!(body.code, 1002);
        assert_eq!(body.error, "INVALID_PATH_PARAM");
        assert_eq!(body.details, Some(json!({ "value": "abc" })));
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("nothing here".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.message, "nothing here");
        assert!(body.details.is_none());
    }
}
