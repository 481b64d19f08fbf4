//! Flow document handlers.
//!
//! The service stores flows verbatim as single JSON blobs. Whole-document
//! replacement is the unit of persistence; there is no partial update.

use axum::extract::{Path, State};
use axum::Json;

use botflow_store::BotId;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /bot/{bot_id}/data`
pub async fn save_flow(
    State(state): State<AppState>,
    Path(bot_id): Path<BotId>,
    Json(data): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.save_data(bot_id, data)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
