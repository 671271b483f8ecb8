//! Defines the HTTP routes for the meal record API.
//!
//! These routes map the CRUD paths to their handler functions. The router is
//! nested under `/api/meals` behind the authentication middleware.

use axum::{routing::get, Router};

use crate::api::meal::handlers::{create_meal, delete_meal, get_meal, list_meals, update_meal};
use crate::state::AppState;

pub fn meal_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route("/{id}", get(get_meal).put(update_meal).delete(delete_meal))
}
