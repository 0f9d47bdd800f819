//! Authenticated identity endpoint.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;

use crate::config::UserProfile;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// `GET /user` — return the caller's identity, or 401 for missing/invalid
/// credentials. Expects `Authorization: Bearer <token>`.
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, ApiError> {
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if !state.auth.accepts(presented) {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(state.auth.profile.clone()))
}
