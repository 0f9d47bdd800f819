//! Resource handlers for `/api/blogs`.
//!
//! Standard REST mapping: GET list, POST create, GET/PUT/DELETE by id.
//! Validation and not-found conditions surface from the store and map to
//! 422/404 via `ApiError`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::store::{BlogDraft, BlogPost};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store.list_all()?;
    tracing::debug!("Listing {} blog posts", posts.len());
    Ok(Json(posts))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.store.get(id)?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<BlogDraft>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let post = state.store.create(&draft)?;
    tracing::info!(id = post.id, "Created blog post '{}'", post.title);
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<BlogDraft>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.store.update(id, &draft)?;
    tracing::info!(id, "Updated blog post '{}'", post.title);
    Ok(Json(post))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    tracing::info!(id, "Deleted blog post");
    Ok(StatusCode::NO_CONTENT)
}
