use async_trait::async_trait;
use thiserror::Error;

use barkeep_core::{Drink, DrinkPatch, Ingredient};

pub mod in_memory;
pub mod sqlite;

/// Store-adapter failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No drink with the requested id.
    #[error("drink not found")]
    NotFound,

    /// The underlying store rejected the operation or is unreachable.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A persisted recipe column could not be encoded or decoded.
    #[error("recipe serialization failure")]
    Codec(#[from] serde_json::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

/// Boundary between drink operations and the persistence engine.
///
/// Each operation is atomic at single-record granularity; concurrent
/// writes rely on the engine's native locking.
#[async_trait]
pub trait DrinkStore: Send + Sync {
    /// Every persisted drink, in insertion order.
    async fn list_all(&self) -> Result<Vec<Drink>, StoreError>;

    /// Persist a new drink; the store assigns the id.
    async fn create(&self, title: &str, recipe: &[Ingredient]) -> Result<Drink, StoreError>;

    /// Apply a partial field replacement to the drink with `id`.
    async fn update(&self, id: i64, patch: DrinkPatch) -> Result<Drink, StoreError>;

    /// Remove the drink with `id`, returning the removed id.
    async fn delete(&self, id: i64) -> Result<i64, StoreError>;
}
