//! Integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a single integer path parameter.
///
/// Values that are not a base-10 `i64` are rejected with
/// `422 Unprocessable Entity` before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IntPath;
///
/// async fn get_user(IntPath(id): IntPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{user_id}", get(get_user));
/// ```
pub struct IntPath(pub i64);

impl<S> FromRequestParts<S> for IntPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        raw.parse::<i64>()
            .map(IntPath)
            .map_err(|_| AppError::InvalidPathParam(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/items/{id}",
            get(|IntPath(id): IntPath| async move { id.to_string() }),
        )
    }

    async fn status_for(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_accepts_integers() {
        assert_eq!(status_for("/items/42").await, StatusCode::OK);
        assert_eq!(status_for("/items/-3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_non_integers() {
        assert_eq!(status_for("/items/abc").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for("/items/1.5").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
