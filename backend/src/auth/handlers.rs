//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for login, validate input,
//! and interact with the credential store and token service for the core
//! authentication logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::auth::errors::AuthError;
use crate::auth::models::{LoginRequest, LoginResponse};
use crate::errors::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let user = state
        .credentials
        .verify_password(&req.username, &req.password)
        .ok_or(AuthError::InvalidCredentials)?;

    let token = state.tokens.issue(user.id, &user.username)?;
    info!("issued session token for {}", user.username);

    Ok(Json(LoginResponse {
        token,
        user: user.clone(),
    }))
}
