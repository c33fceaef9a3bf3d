use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use messaging::{EchoListener, NatsPublisher, NatsQueueStream};
use std::sync::Arc;
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

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    info!("Connecting to NATS at {}", config.nats.url);

    let nats_client = async_nats::connect(&config.nats.url).await?;
    let jetstream = async_nats::jetstream::new(nats_client.clone());

    // Declare the broker topology once at startup
    config.topology.declare(&jetstream).await?;

    let publisher = NatsPublisher::new(jetstream.clone(), &config.nats);

    // Start the queue listener: consumes lifecycle events and re-publishes
    // their processed form
    let queue_stream = NatsQueueStream::subscribe(&jetstream, &config.topology).await?;
    let listener = EchoListener::new(Arc::new(publisher.clone()), config.topology.topic());
    tokio::spawn(async move {
        listener.run(queue_stream).await;
    });

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
        nats_client,
        publisher,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!("Starting Booking API with production-ready shutdown (30s timeout)");

    let server_config = state.config.server.clone();

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connection");
            // MongoDB client closes automatically on drop
            drop(state.mongo_client);
            info!("Shutting down: draining NATS connection");
            if let Err(e) = state.nats_client.drain().await {
                tracing::warn!(error = %e, "Failed to drain NATS connection");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Booking API shutdown complete");
    Ok(())
}
