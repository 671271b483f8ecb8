//! Authentication module for managing user identities, session tokens, and
//! access control.
//!
//! This module provides the public interface for authentication-related
//! functionality: the login endpoint, token issuance and verification, and
//! the authorization middleware guarding protected routes.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use middleware::*;
pub use models::*;
pub use routes::*;
pub use service::*;
