use std::sync::Arc;

use anyhow::Context;

use barkeep_api::config::Config;
use barkeep_api::context::AppContext;
use barkeep_api::app;
use barkeep_auth::{JwksClient, Rs256Verifier};
use barkeep_infra::SqliteDrinkStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    barkeep_observability::init();

    let config = Config::from_env();

    let keys = JwksClient::new(&config.jwks_url)
        .fetch()
        .await
        .context("fetching issuer key set")?;
    let verifier = Rs256Verifier::new(keys, config.issuer.clone(), config.audience.clone());

    let store = SqliteDrinkStore::connect(&config.database_url)
        .await
        .context("opening drink store")?;

    let ctx = Arc::new(AppContext::new(Arc::new(store), Arc::new(verifier)));
    let app = app::build_app(ctx);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
