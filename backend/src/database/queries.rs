//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations on meals,
//! abstracting the parameterized statements from the API handlers. Each
//! operation is a single statement; there are no multi-statement
//! transactions, retries, or caching.

use sqlx::PgPool;

use crate::database::models::{Meal, MealFields};

const MEAL_COLUMNS: &str = "id, name, ingredients, recipe, difficulty, created_at, updated_at";

/// Parameterized CRUD operations over the `meals` table.
///
/// `None` results signal "no such row"; the handler layer maps them to 404.
/// Database failures surface as `sqlx::Error` and map to 500.
#[derive(Clone)]
pub struct MealStore {
    pool: PgPool,
}

impl MealStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All meals, newest first.
    pub async fn list(&self) -> Result<Vec<Meal>, sqlx::Error> {
        let query = format!("SELECT {MEAL_COLUMNS} FROM meals ORDER BY created_at DESC");
        sqlx::query_as::<_, Meal>(&query).fetch_all(&self.pool).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE id = $1");
        sqlx::query_as::<_, Meal>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, fields: &MealFields) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals (name, ingredients, recipe, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MEAL_COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(&fields.name)
            .bind(&fields.ingredients)
            .bind(&fields.recipe)
            .bind(&fields.difficulty)
            .fetch_one(&self.pool)
            .await
    }

    /// Full replace of every user-supplied field. `updated_at` is refreshed
    /// by the database trigger, not here.
    pub async fn update(&self, id: i32, fields: &MealFields) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!(
            "UPDATE meals \
             SET name = $1, ingredients = $2, recipe = $3, difficulty = $4 \
             WHERE id = $5 \
             RETURNING {MEAL_COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(&fields.name)
            .bind(&fields.ingredients)
            .bind(&fields.recipe)
            .bind(&fields.difficulty)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns `true` when a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    // These exercise a live Postgres instance; run them with
    // `cargo test -- --ignored` and DATABASE_URL pointing at a test database.
    async fn store() -> MealStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let pool = database::connect(&url).await.expect("connect failed");
        database::create_tables(&pool).await.expect("schema failed");
        MealStore::new(pool)
    }

    fn sample() -> MealFields {
        MealFields {
            name: "Carbonara".to_string(),
            ingredients: "spaghetti, eggs, guanciale, pecorino".to_string(),
            recipe: "Render guanciale, toss pasta with egg and cheese.".to_string(),
            difficulty: "medium".to_string(),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn create_then_get_roundtrips() {
        let store = store().await;

        let created = store.create(&sample()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.ingredients, created.ingredients);
        assert_eq!(fetched.recipe, created.recipe);
        assert_eq!(fetched.difficulty, created.difficulty);

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn update_refreshes_updated_at() {
        let store = store().await;

        let created = store.create(&sample()).await.unwrap();
        let mut fields = sample();
        fields.difficulty = "hard".to_string();

        let updated = store.update(created.id, &fields).await.unwrap().unwrap();
        assert_eq!(updated.difficulty, "hard");
        assert!(updated.updated_at > created.updated_at);

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn delete_twice_reports_missing_row() {
        let store = store().await;

        let created = store.create(&sample()).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
    }
}
