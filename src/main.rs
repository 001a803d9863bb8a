#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Missing `.env` is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    // Reject a broken bundled catalog before serving an empty showcase.
    let catalog = client::site::parse_catalog(client::site::PROJECTS_JSON)?;
    tracing::info!(projects = catalog.len(), "project catalog loaded");

    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let app = routes::app(&config, conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| StartupError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("portfolio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
