//! Middleware for protecting authenticated routes.
//!
//! This is the only component enforcing the authentication boundary: every
//! protected route is layered with [`require_auth`], which extracts the
//! bearer token, verifies it, and attaches the resulting identity to the
//! request. On any failure the downstream handler is never invoked.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::errors::AuthError;
use crate::auth::models::AuthUser;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingCredentials)?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(AuthUser {
        user_id: claims.user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
