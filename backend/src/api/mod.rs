//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the protected API domains,
//! meal records and user profiles, excluding the authentication routes which
//! are handled separately.

pub mod meal;
pub mod user;
