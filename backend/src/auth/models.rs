//! Data structures for authentication-related entities.
//!
//! This module defines the user identity, the JWT claims embedded in every
//! session token, and the request/response bodies of the login endpoint.

use serde::{Deserialize, Serialize};

/// A statically configured user identity.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Claims embedded in every session token issued by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// The verified identity attached to a request by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: i32,
    pub username: String,
    pub user: User,
}
