use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use receipt_scan_server::config::Config;
use receipt_scan_server::db::open_database;
use receipt_scan_server::ocr::HttpOcrClient;
use receipt_scan_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_scan_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Receipt Scan Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}, sync enabled: {}",
        config.environment,
        config.server_address(),
        config.sync_enabled
    );

    // Open the receipt database
    let db = open_database(&config.database_path)?;

    // Build the OCR upstream client
    let ocr = Arc::new(HttpOcrClient::new(&config)?);

    // Create app state
    let state = AppState::new(db, ocr, config.clone());

    // Build router
    let app = app(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
