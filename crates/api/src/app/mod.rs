//! HTTP application wiring (axum router + CORS).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and response envelopes
//! - `errors.rs`: the uniform JSON error envelope

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::context::AppContext;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full router around an explicitly constructed context
/// (public entrypoint used by `main.rs` and the black-box tests).
pub fn build_app(ctx: Arc<AppContext>) -> Router {
    Router::new().merge(routes::router()).layer(
        ServiceBuilder::new()
            .layer(Extension(ctx))
            .layer(cors_layer()),
    )
}

/// Permissive CORS: the API is called directly from browser clients.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
