//! `barkeep-infra` — persistence boundary for the drinks menu.
//!
//! The [`DrinkStore`] trait is the seam between handlers and the
//! persistence engine; `SqliteDrinkStore` is the production implementation,
//! `InMemoryDrinkStore` backs unit tests.

pub mod store;

pub use store::in_memory::InMemoryDrinkStore;
pub use store::sqlite::SqliteDrinkStore;
pub use store::{DrinkStore, StoreError};
