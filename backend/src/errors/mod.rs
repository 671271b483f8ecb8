//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the entire backend and
//! provides the single point where errors are translated into HTTP responses.
//! Every failure a handler can produce maps to one of these variants, so
//! nothing propagates to the client as an unhandled fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request data. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or a missing/invalid/expired token. Maps to 401.
    #[error("{0}")]
    Authentication(String),

    /// The requested record does not exist. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Database or other infrastructure failure. Maps to 500 with a
    /// generic message; details are logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        error!("database error: {e}");
        ApiError::Internal("Internal server error".to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TokenCreation => {
                error!("token issuance failed");
                ApiError::Internal("Failed to generate token".to_string())
            }
            other => ApiError::Authentication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_status_codes() {
        let cases = [
            (ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Authentication("no".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn auth_errors_become_unauthorized() {
        let err: ApiError = AuthError::Expired.into();
        assert!(matches!(err, ApiError::Authentication(_)));
    }

    #[test]
    fn token_creation_becomes_internal() {
        let err: ApiError = AuthError::TokenCreation.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
