pub mod error;
pub mod handlers;
pub mod routes;
pub mod settings;
pub mod state;
pub mod telemetry;

use anyhow::Result;
use gradebook_core::AggregationEngine;

// Re-exports
pub use settings::Settings;
pub use state::ApiState;

/// Connect the grade store and serve the HTTP API until Ctrl-C.
pub async fn serve(settings: &Settings) -> Result<()> {
    let store = gradebook_db::connect(settings.database_url()?, &settings.pool_settings())?;
    let state = ApiState::new(AggregationEngine::new(store));

    let app = routes::create_router(state, settings.request_timeout());

    let addr = settings.bind_addr();
    tracing::info!("Gradebook API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
