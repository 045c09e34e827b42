//! Lot Development API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{LotDevelopment, LotDraft};
use shared::{AppError, AppResult};

use crate::api::{AppJson, MessageResponse};
use crate::core::ServerState;
use crate::db::repository::LotRepository;

/// GET /api/lots - 获取所有分块地产
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<LotDevelopment>>> {
    let repo = LotRepository::new(state.db.clone());
    let lots = repo.find_all().await?;
    Ok(Json(lots))
}

/// GET /api/lots/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<LotDevelopment>> {
    let repo = LotRepository::new(state.db.clone());
    let lot = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::lot_not_found(&id))?;
    Ok(Json(lot))
}

/// POST /api/lots
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<LotDraft>,
) -> AppResult<Json<LotDevelopment>> {
    let repo = LotRepository::new(state.db.clone());
    let lot = repo.create(payload).await?;
    tracing::info!(id = %lot.id, "Lot created");
    Ok(Json(lot))
}

/// PUT /api/lots/{id} - 整体替换 (`dispo` 不与 `lots` 做校验)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<LotDraft>,
) -> AppResult<Json<LotDevelopment>> {
    let repo = LotRepository::new(state.db.clone());
    let lot = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::lot_not_found(&id))?;
    Ok(Json(lot))
}

/// DELETE /api/lots/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = LotRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::lot_not_found(&id));
    }
    tracing::info!(id = %id, "Lot deleted");
    Ok(Json(MessageResponse::new("Lot deleted successfully")))
}

/// POST /api/lots/bulk
pub async fn bulk_replace(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<Vec<LotDraft>>,
) -> AppResult<Json<MessageResponse>> {
    let repo = LotRepository::new(state.db.clone());
    let saved = repo.replace_all_drafts(payload).await?;
    tracing::info!(count = saved.len(), "Lots replaced");
    Ok(Json(MessageResponse::new(format!("{} lots saved", saved.len()))))
}
