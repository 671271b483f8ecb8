//! Module for database connection setup and schema bootstrap.
//!
//! This module initializes the Postgres connection pool, verifies the
//! database is reachable, and creates the tables and triggers the
//! application needs. Any failure here is fatal; the server never starts in
//! a degraded mode.

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

pub mod models;
pub mod queries;

const USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const MEALS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS meals (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        ingredients TEXT NOT NULL,
        recipe TEXT NOT NULL,
        difficulty VARCHAR(50) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

// Refreshes updated_at on every UPDATE so the application never has to.
const UPDATED_AT_TRIGGER: &str = r#"
    CREATE OR REPLACE FUNCTION update_updated_at_column()
    RETURNS TRIGGER AS $$
    BEGIN
        NEW.updated_at = CURRENT_TIMESTAMP;
        RETURN NEW;
    END;
    $$ language 'plpgsql';

    DROP TRIGGER IF EXISTS update_meals_updated_at ON meals;
    CREATE TRIGGER update_meals_updated_at
        BEFORE UPDATE ON meals
        FOR EACH ROW
        EXECUTE FUNCTION update_updated_at_column();
"#;

/// Connect to the database and verify the connection with a ping.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    info!("Connected to database");

    Ok(pool)
}

/// Create the `users` and `meals` tables and the `updated_at` trigger.
///
/// The `users` table is not consulted by the hardcoded login path; it is
/// kept for schema parity and future use.
pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(USERS_TABLE).execute(pool).await?;
    sqlx::raw_sql(MEALS_TABLE).execute(pool).await?;
    sqlx::raw_sql(UPDATED_AT_TRIGGER).execute(pool).await?;

    info!("Database tables created");
    Ok(())
}
