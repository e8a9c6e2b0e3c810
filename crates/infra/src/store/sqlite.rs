//! sqlx-backed drink store over a single `drinks` table.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use barkeep_core::{Drink, DrinkPatch, Ingredient};

use super::{DrinkStore, StoreError};

/// Production store: one `drinks` table, recipe persisted as JSON text.
pub struct SqliteDrinkStore {
    pool: SqlitePool,
}

impl SqliteDrinkStore {
    /// Connect to `url` (e.g. `sqlite:barkeep.db`), creating the database
    /// file and schema when absent.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Private in-memory database, for tests and local development.
    pub async fn in_memory() -> Result<Self, StoreError> {
        // Single connection: every connection to `:memory:` is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS drinks (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 title TEXT NOT NULL UNIQUE,
                 recipe TEXT NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_drink(row: &SqliteRow) -> Result<Drink, StoreError> {
    let id: i64 = row.try_get("id")?;
    let title: String = row.try_get("title")?;
    let recipe: String = row.try_get("recipe")?;
    let recipe: Vec<Ingredient> = serde_json::from_str(&recipe)?;

    Ok(Drink { id, title, recipe })
}

#[async_trait]
impl DrinkStore for SqliteDrinkStore {
    async fn list_all(&self) -> Result<Vec<Drink>, StoreError> {
        let rows = sqlx::query("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_drink).collect()
    }

    async fn create(&self, title: &str, recipe: &[Ingredient]) -> Result<Drink, StoreError> {
        let encoded = serde_json::to_string(recipe)?;

        let result = sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?1, ?2)")
            .bind(title)
            .bind(&encoded)
            .execute(&self.pool)
            .await?;

        Ok(Drink {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            recipe: recipe.to_vec(),
        })
    }

    async fn update(&self, id: i64, patch: DrinkPatch) -> Result<Drink, StoreError> {
        let row = sqlx::query("SELECT id, title, recipe FROM drinks WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;

        let mut drink = row_to_drink(&row)?;
        drink.apply(patch);

        let encoded = serde_json::to_string(&drink.recipe)?;
        sqlx::query("UPDATE drinks SET title = ?1, recipe = ?2 WHERE id = ?3")
            .bind(&drink.title)
            .bind(&encoded)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(drink)
    }

    async fn delete(&self, id: i64) -> Result<i64, StoreError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(id)
    }
}
