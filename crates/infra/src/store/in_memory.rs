use std::sync::Mutex;

use async_trait::async_trait;

use barkeep_core::{Drink, DrinkPatch, Ingredient};

use super::{DrinkStore, StoreError};

/// In-memory drink store.
///
/// Intended for tests/dev. Ids increase monotonically and are never
/// reused; the title-uniqueness constraint matches the production schema.
#[derive(Debug, Default)]
pub struct InMemoryDrinkStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    drinks: Vec<Drink>,
}

impl InMemoryDrinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))
    }
}

#[async_trait]
impl DrinkStore for InMemoryDrinkStore {
    async fn list_all(&self) -> Result<Vec<Drink>, StoreError> {
        Ok(self.lock()?.drinks.clone())
    }

    async fn create(&self, title: &str, recipe: &[Ingredient]) -> Result<Drink, StoreError> {
        let mut inner = self.lock()?;

        if inner.drinks.iter().any(|d| d.title == title) {
            return Err(StoreError::Persistence(format!(
                "title '{title}' already exists"
            )));
        }

        inner.next_id += 1;
        let drink = Drink {
            id: inner.next_id,
            title: title.to_string(),
            recipe: recipe.to_vec(),
        };
        inner.drinks.push(drink.clone());
        Ok(drink)
    }

    async fn update(&self, id: i64, patch: DrinkPatch) -> Result<Drink, StoreError> {
        let mut inner = self.lock()?;

        let drink = inner
            .drinks
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound)?;
        drink.apply(patch);
        Ok(drink.clone())
    }

    async fn delete(&self, id: i64) -> Result<i64, StoreError> {
        let mut inner = self.lock()?;

        let index = inner
            .drinks
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.drinks.remove(index);
        Ok(id)
    }
}
