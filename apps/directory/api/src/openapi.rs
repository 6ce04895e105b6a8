use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "In-memory user directory: list, get, create and delete users"
    )
)]
struct BaseDoc;

/// Combined API documentation served at `/openapi.json`.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_users::handlers::ApiDoc::openapi());
        doc
    }
}
