use axum::routing::get;
use axum::Router;

use crate::server::blogs;
use crate::server::health::health;
use crate::server::state::AppState;
use crate::server::user::current_user;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/user", get(current_user))
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        .route(
            "/api/blogs/{id}",
            get(blogs::show).put(blogs::update).delete(blogs::destroy),
        )
        .with_state(state)
}
