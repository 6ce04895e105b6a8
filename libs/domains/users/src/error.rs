use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use thiserror::Error;
use utoipa::{ToResponse, ToSchema};

pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_ALREADY_EXISTS: &str = "User already exists";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("User with name '{0}' already exists")]
    Conflict(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    /// Fixed client-facing message; the id or name stays in the logs.
    pub fn detail(&self) -> &'static str {
        match self {
            UserError::NotFound(_) => USER_NOT_FOUND,
            UserError::Conflict(_) => USER_ALREADY_EXISTS,
        }
    }
}

/// Error body for directory errors: `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match &self {
            UserError::NotFound(id) => tracing::info!(user_id = *id, "User not found"),
            UserError::Conflict(name) => tracing::info!(name = %name, "User already exists"),
        }

        let body = ErrorDetail {
            detail: self.detail().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[derive(ToResponse)]
#[response(
    description = "User not found",
    content_type = "application/json",
    example = json!({ "detail": "User not found" })
)]
pub struct UserNotFoundResponse(pub ErrorDetail);

#[derive(ToResponse)]
#[response(
    description = "User already exists",
    content_type = "application/json",
    example = json!({ "detail": "User already exists" })
)]
pub struct UserConflictResponse(pub ErrorDetail);
