//! `barkeep-core` — domain model for the drinks menu.
//!
//! This crate contains **pure domain** data (no HTTP, no storage concerns).

pub mod drink;

pub use drink::{Drink, DrinkPatch, Ingredient, IngredientSummary, LongDrink, RecipeInput, ShortDrink};
