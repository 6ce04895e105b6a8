use axum::Router;

pub mod users;

/// Creates the API routes.
///
/// Returns a stateless Router (all sub-routers have state already applied);
/// `create_router` adds docs and middleware on top.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(users::router(state))
}
