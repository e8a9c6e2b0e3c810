use std::sync::Arc;

use barkeep_auth::TokenVerifier;
use barkeep_infra::DrinkStore;

/// Explicitly constructed server context handed to every handler.
///
/// Holds the store handle and the verifier with its cached issuer key set.
/// Nothing in the process is ambient or global; tests build their own
/// context with substitute implementations.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn DrinkStore>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppContext {
    pub fn new(store: Arc<dyn DrinkStore>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { store, verifier }
    }
}
