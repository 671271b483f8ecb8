//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and
//! retrieved from the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `meals` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    pub recipe: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of meal create and full-update requests. All fields are required;
/// there is no partial patch.
#[derive(Debug, Deserialize)]
pub struct MealFields {
    pub name: String,
    pub ingredients: String,
    pub recipe: String,
    pub difficulty: String,
}
