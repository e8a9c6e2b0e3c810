use axum::{Router, routing::get};

pub mod drinks;
pub mod system;

/// The full route table.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(drinks::router())
}
