pub mod health;
pub mod scan;
pub mod sync;

pub use health::health_check;
pub use scan::scan_receipt;
pub use sync::sync_read;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fallback for unmatched requests when sync is enabled
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Fallback for anything but a scan POST in the scan-only configuration
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
