use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IntPath, JsonBody, QueryParams,
    errors::responses::{InvalidPathParamResponse, JsonExtractionResponse, QueryExtractionResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ErrorDetail, UserConflictResponse, UserNotFoundResponse, UserResult};
use crate::models::{CreateUser, User, UserFilter};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI tag for the user directory endpoints
pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, delete_user),
    components(
        schemas(User, CreateUser, UserFilter, ErrorDetail),
        responses(
            UserNotFoundResponse,
            UserConflictResponse,
            InvalidPathParamResponse,
            JsonExtractionResponse,
            QueryExtractionResponse
        )
    ),
    tags(
        (name = TAG, description = "In-memory user directory")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", get(get_user).delete(delete_user))
        .with_state(shared_service)
}

/// List users, optionally filtered by name substring
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    params(UserFilter),
    responses(
        (status = 200, description = "Users in insertion order", body = Vec<User>),
        (status = 400, response = QueryExtractionResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    QueryParams(filter): QueryParams<UserFilter>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users(filter).await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 409, response = UserConflictResponse),
        (status = 422, response = JsonExtractionResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<Json<User>> {
    let user = service.create_user(input).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, response = UserNotFoundResponse),
        (status = 422, response = InvalidPathParamResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IntPath(user_id): IntPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(user_id).await?;
    Ok(Json(user))
}

/// Delete a user, returning the removed entry
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = User),
        (status = 404, response = UserNotFoundResponse),
        (status = 422, response = InvalidPathParamResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IntPath(user_id): IntPath,
) -> UserResult<Json<User>> {
    let user = service.delete_user(user_id).await?;
    Ok(Json(user))
}
