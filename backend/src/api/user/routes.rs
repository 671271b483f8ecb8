//! Defines the HTTP routes for user profile endpoints.

use axum::{routing::get, Router};

use crate::api::user::handlers::get_profile;
use crate::state::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}
