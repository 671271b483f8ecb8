//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle the unauthenticated login endpoint. They are designed
//! to be nested under `/api/auth` in the main Axum router.

use axum::{routing::post, Router};

use crate::auth::handlers::login;
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
