use anyhow::Context;
use clap::Parser;

use storefront_api::config::ServerConfig;
use storefront_catalog::CatalogQueryEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    storefront_observability::init_with(config.log_format);

    let catalog = CatalogQueryEngine::builtin().context("failed to load built-in catalog")?;
    tracing::info!(products = catalog.len(), "catalog loaded");

    let app = storefront_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
