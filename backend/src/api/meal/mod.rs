//! Module for the meal record API.
//!
//! This module defines the public interface and structure for the CRUD
//! endpoints over the `meals` table.

pub mod handlers;
pub mod routes;
