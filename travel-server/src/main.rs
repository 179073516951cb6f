use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use travel_server::analyze::AnalyzerConfig;
use travel_server::store::{ItineraryStore, StoreConfig};
use travel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Itinerary file location, overridable for deployments
    let path =
        std::env::var("ITINERARY_PATH").unwrap_or_else(|_| "itinerary.json".to_string());

    let store = ItineraryStore::open(StoreConfig::new(&path));
    tracing::info!(path = %path, "itinerary store ready");

    let state = AppState::new(store, AnalyzerConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Travel itinerary server listening on http://{addr}");
    tracing::info!("  GET  /health                    - Health check");
    tracing::info!("  GET  /api/itinerary             - Legs plus warnings");
    tracing::info!("  PUT  /api/itinerary             - Replace legs");
    tracing::info!("  GET  /api/itinerary/warnings    - Warnings only");
    tracing::info!("  POST /api/itinerary/extract     - Parse pasted confirmation text");
    tracing::info!("  GET  /api/itinerary/export.csv  - Itinerary as CSV");
    tracing::info!("  POST /api/itinerary/import      - Replace legs from CSV");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
