//! Receipt Scan Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod cors;
pub mod db;
pub mod error;
pub mod models;
pub mod ocr;
pub mod routes;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use ocr::OcrEngine;
use routes::{health_check, method_not_allowed, not_found, scan_receipt, sync_read};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub ocr: Arc<dyn OcrEngine>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database, OCR engine and configuration
    pub fn new(db: Db, ocr: Arc<dyn OcrEngine>, config: Config) -> Self {
        Self { db, ocr, config }
    }
}

/// Build the application router for the given state.
///
/// With sync enabled the service exposes the scan endpoint plus the per-user
/// history read, and unmatched requests get 404. In the scan-only
/// configuration the history route does not exist and anything that is not a
/// scan POST gets 405.
pub fn app(state: AppState) -> Router {
    let router = if state.config.sync_enabled {
        Router::new()
            .route("/", post(scan_receipt).fallback(not_found))
            .route("/sync", get(sync_read).fallback(not_found))
            .route("/health", get(health_check).fallback(not_found))
            .fallback(not_found)
    } else {
        Router::new()
            .route("/", post(scan_receipt).fallback(method_not_allowed))
            .route("/health", get(health_check).fallback(method_not_allowed))
            .fallback(method_not_allowed)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors_preamble))
        .with_state(state)
}
