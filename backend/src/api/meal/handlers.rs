//! Handler functions for the meal record API endpoints.
//!
//! Each handler is a thin translation layer: validate the request, run a
//! single store operation, and wrap the result in the response envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::database::models::{Meal, MealFields};
use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn meal_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::Validation("Invalid meal ID".to_string()))
}

fn meal_body(body: Result<Json<MealFields>, JsonRejection>) -> Result<MealFields, ApiError> {
    body.map(|Json(fields)| fields)
        .map_err(|e| ApiError::Validation(e.body_text()))
}

/// GET /api/meals
pub async fn list_meals(State(state): State<AppState>) -> Result<Json<MealsResponse>, ApiError> {
    let meals = state.meals.list().await?;
    Ok(Json(MealsResponse { meals }))
}

/// GET /api/meals/{id}
pub async fn get_meal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MealResponse>, ApiError> {
    let id = meal_id(id)?;

    let meal = state
        .meals
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

    Ok(Json(MealResponse { meal }))
}

/// POST /api/meals
pub async fn create_meal(
    State(state): State<AppState>,
    body: Result<Json<MealFields>, JsonRejection>,
) -> Result<(StatusCode, Json<MealResponse>), ApiError> {
    let fields = meal_body(body)?;

    let meal = state.meals.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(MealResponse { meal })))
}

/// PUT /api/meals/{id}
pub async fn update_meal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<MealFields>, JsonRejection>,
) -> Result<Json<MealResponse>, ApiError> {
    let id = meal_id(id)?;
    let fields = meal_body(body)?;

    let meal = state
        .meals
        .update(id, &fields)
        .await?
        .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

    Ok(Json(MealResponse { meal }))
}

/// DELETE /api/meals/{id}
pub async fn delete_meal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = meal_id(id)?;

    if !state.meals.delete(id).await? {
        return Err(ApiError::NotFound("Meal not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Meal deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    use super::*;
    use crate::api::meal::routes::meal_router;
    use crate::state::test_state;

    fn meals_app() -> Router {
        Router::new()
            .nest("/meals", meal_router())
            .with_state(test_state())
    }

    // Validation happens before any database round trip, so these pass with
    // the lazy (never-connected) test pool.
    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let resp = meals_app()
            .oneshot(
                Request::builder()
                    .uri("/meals/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_bad_request() {
        let resp = meals_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/meals")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Toast"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_with_malformed_body_is_bad_request() {
        let resp = meals_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/meals/1")
                    .header("content-type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
