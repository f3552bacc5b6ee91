use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_blogs::handlers;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(url = %config.mongodb.url(), "Connecting to MongoDB");

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    info!(
        database = config.mongodb.database(),
        collection = config.mongodb.collection(),
        "Connected to MongoDB"
    );

    let state = AppState::new(config, mongo_client);

    let api_routes = api::routes(&state);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    // Liveness probe lives at the root, outside /api
    let app = router.merge(handlers::health_router(state.blogs.clone()));

    info!("Starting Blog API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Blog API shutdown complete");
    Ok(())
}
