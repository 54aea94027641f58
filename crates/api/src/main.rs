use std::sync::Arc;

use anyhow::Context;

use shopdesk_api::app::{self, services::AppServices};
use shopdesk_api::config::AppConfig;
use shopdesk_infra::{CatalogSnapshot, InMemoryCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    shopdesk_observability::init(config.log_format);

    let snapshot = match &config.seed_path {
        Some(path) => CatalogSnapshot::from_path(path)
            .with_context(|| format!("loading catalog seed from {}", path.display()))?,
        None => {
            tracing::warn!("SHOPDESK_SEED_PATH not set; starting with an empty catalog");
            CatalogSnapshot::default()
        }
    };
    let catalog = Arc::new(InMemoryCatalog::from_snapshot(snapshot));
    let services = AppServices::from_catalog(catalog, &config);

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
