//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur during login and token
//! verification. The credential variants deliberately share one client-facing
//! message so a caller cannot distinguish an unknown username from a wrong
//! password.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authorization header missing or malformed")]
    MissingCredentials,

    /// The token was well formed and correctly signed but its expiry has
    /// passed. Terminal state; there is no refresh or revocation.
    #[error("Token has expired")]
    Expired,

    /// Bad signature, wrong algorithm, or structurally malformed token.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Failed to generate token")]
    TokenCreation,
}
