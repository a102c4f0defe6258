use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::{ERR_USER_ID_REQUIRED, SYNC_PAGE_LIMIT};
use crate::db::receipts;
use crate::error::{AppError, Result};
use crate::models::SyncedReceipt;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Return a user's most recent receipts, newest first.
///
/// One bounded page over the user's full history; there is no continuation
/// token to fetch beyond it.
pub async fn sync_read(
    State(state): State<AppState>,
    Query(params): Query<SyncParams>,
) -> Result<Json<Vec<SyncedReceipt>>> {
    let user_id = match params.user_id.filter(|s| !s.is_empty()) {
        Some(user_id) => user_id,
        None => return Err(AppError::InvalidInput(ERR_USER_ID_REQUIRED.to_string())),
    };

    let db = state.db.clone();
    let scan_user = user_id.clone();
    let rows = tokio::task::spawn_blocking(move || {
        receipts::recent_receipts(&db, &scan_user, SYNC_PAGE_LIMIT)
    })
    .await??;

    tracing::info!("Sync read for user {}: {} rows", user_id, rows.len());

    let entries = rows
        .into_iter()
        .map(|(timestamp, record)| SyncedReceipt::from_row(timestamp, record))
        .collect();

    Ok(Json(entries))
}
