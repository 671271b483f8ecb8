//! Module for user profile API endpoints.
//!
//! This module handles user information that is distinct from the core
//! authentication process, currently just the profile lookup.

pub mod handlers;
pub mod routes;
