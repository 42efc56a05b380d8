//! User handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use storefront_types::User;

pub async fn get(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, ApiError> {
    if username.is_empty() {
        return Err(ApiError::MissingParameter("Username"));
    }

    state
        .store
        .find_user(&username)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `GET /api/user/` with no username segment
pub async fn missing_username() -> ApiError {
    ApiError::MissingParameter("Username")
}
