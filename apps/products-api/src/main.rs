//! Produtos API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.log);

    observability::init_metrics()?;

    let app = api::app(&config)?;

    info!(
        environment = ?config.environment,
        "Starting Produtos API on {}",
        config.server.address()
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async {
        info!("No connections to close");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Produtos API shutdown complete");
    Ok(())
}
