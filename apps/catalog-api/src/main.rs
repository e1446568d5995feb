//! Catalog API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        empty_result_policy = %config.catalog.empty_result_policy,
        "Using in-memory product storage"
    );

    let state = AppState::new(config);

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let repository = state.repository.clone();
    create_production_app(
        app,
        &state.config.server,
        state.config.catalog.shutdown_timeout,
        async move {
            let products = repository.len().await;
            info!(
                products = products,
                "Shutting down: discarding in-memory catalog"
            );
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
