//! Handler functions for user profile API endpoints.
//!
//! These functions serve the identity attached to the request by the auth
//! middleware, resolved back through the credential store.

use axum::{extract::State, Extension, Json};

use crate::auth::models::{AuthUser, ProfileResponse};
use crate::errors::ApiError;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .credentials
        .lookup_by_id(auth.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        user_id: auth.user_id,
        username: auth.username,
        user: user.clone(),
    }))
}
