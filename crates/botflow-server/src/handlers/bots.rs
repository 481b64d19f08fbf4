//! Bot CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::Json;

use botflow_store::{BotId, Pagination};

use crate::error::ApiError;
use crate::schema::bots::{BotView, CreateBotRequest, PaginationQuery, UpdateBotRequest};
use crate::state::AppState;

/// `POST /bot/create`
pub async fn create_bot(
    State(state): State<AppState>,
    Json(req): Json<CreateBotRequest>,
) -> Result<Json<BotView>, ApiError> {
    let mut service = state.service.lock().await;
    let record = service.create_bot(req.into_new_bot())?;
    Ok(Json(BotView::from(record)))
}

/// `GET /bot/` with optional `skip` and `limit` query parameters.
pub async fn list_bots(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<BotView>>, ApiError> {
    if query.skip < 0 || query.limit < 1 {
        return Err(ApiError::BadRequest(
            "`skip` must be >= 0 and `limit` must be >= 1".to_string(),
        ));
    }
    let page = Pagination {
        skip: query.skip as usize,
        limit: query.limit as usize,
    };
    let service = state.service.lock().await;
    let records = service.list_bots(page)?;
    Ok(Json(records.into_iter().map(BotView::from).collect()))
}

/// `GET /bot/{bot_id}`
pub async fn get_bot(
    State(state): State<AppState>,
    Path(bot_id): Path<BotId>,
) -> Result<Json<BotView>, ApiError> {
    let service = state.service.lock().await;
    let record = service.get_bot(bot_id)?;
    Ok(Json(BotView::from(record)))
}

/// `PUT /bot/{bot_id}`
pub async fn update_bot(
    State(state): State<AppState>,
    Path(bot_id): Path<BotId>,
    Json(req): Json<UpdateBotRequest>,
) -> Result<Json<BotView>, ApiError> {
    let mut service = state.service.lock().await;
    let record = service.update_bot(bot_id, req.into_update())?;
    Ok(Json(BotView::from(record)))
}

/// `DELETE /bot/{bot_id}`
pub async fn delete_bot(
    State(state): State<AppState>,
    Path(bot_id): Path<BotId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_bot(bot_id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
