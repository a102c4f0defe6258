use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::constants::{ERR_IMAGE_AND_USER_REQUIRED, ERR_IMAGE_REQUIRED, MAX_IMAGE_B64_BYTES};
use crate::db::receipts;
use crate::error::{AppError, Result};
use crate::models::{Receipt, ReceiptRecord};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub image: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Scan a receipt image.
///
/// Forwards the base64 image to the OCR upstream, normalizes the extracted
/// fields, and — with sync enabled — stores the result under
/// (userId, timestamp) before responding. The stored timestamp is not part
/// of the response.
pub async fn scan_receipt(
    State(state): State<AppState>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<Receipt>> {
    let image = payload.image.as_deref().filter(|s| !s.is_empty());
    let user_id = payload.user_id.as_deref().filter(|s| !s.is_empty());

    // Nothing external is called until the request shape is valid
    let (image, user_id) = if state.config.sync_enabled {
        match (image, user_id) {
            (Some(image), Some(user_id)) => (image, Some(user_id.to_string())),
            _ => {
                return Err(AppError::InvalidInput(
                    ERR_IMAGE_AND_USER_REQUIRED.to_string(),
                ))
            }
        }
    } else {
        match image {
            Some(image) => (image, None),
            None => return Err(AppError::InvalidInput(ERR_IMAGE_REQUIRED.to_string())),
        }
    };

    if image.len() > MAX_IMAGE_B64_BYTES {
        tracing::warn!(
            "Rejecting oversized image payload: {} bytes (max: {})",
            image.len(),
            MAX_IMAGE_B64_BYTES
        );
        return Err(AppError::PayloadTooLarge);
    }

    let fields = state.ocr.recognize_receipt(image).await?;
    let receipt = Receipt::from_fields(fields);

    if let Some(user_id) = user_id {
        // Row key is assigned here, at write time; a second scan for the
        // same user within the same millisecond overwrites the first
        let timestamp = Utc::now().timestamp_millis() as u64;
        let record = ReceiptRecord::from(&receipt);

        let db = state.db.clone();
        let key_user = user_id.clone();
        tokio::task::spawn_blocking(move || {
            receipts::insert_receipt(&db, &key_user, timestamp, &record)
        })
        .await??;

        tracing::info!("Stored receipt for user {} at {}", user_id, timestamp);
    }

    Ok(Json(receipt))
}
