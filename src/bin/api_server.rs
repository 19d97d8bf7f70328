// API Server Binary Entry Point
//
// Usage: cargo run --features api --bin api_server

use std::net::SocketAddr;
use succulent_analytics::{create_router, AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // info for this crate, warn for the rest
                "succulent_analytics=info,tower_http=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  SUCCULENT_STORE: {}", config.store_path.display());
    tracing::info!("  WATERING_EVENT_TYPE: {}", config.watering_event_type);
    tracing::info!("  PORT: {}", config.port);

    // A store that cannot be read stops startup here
    let state = AppState::new(&config).await?;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
