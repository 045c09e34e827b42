//! Property API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Property, PropertyDraft};
use shared::{AppError, AppResult};

use crate::api::{AppJson, MessageResponse};
use crate::core::ServerState;
use crate::db::repository::PropertyRepository;

/// GET /api/properties - 获取所有房产 (插入顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Property>>> {
    let repo = PropertyRepository::new(state.db.clone());
    let properties = repo.find_all().await?;
    Ok(Json(properties))
}

/// GET /api/properties/{id} - 获取单个房产
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Property>> {
    let repo = PropertyRepository::new(state.db.clone());
    let property = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::property_not_found(&id))?;
    Ok(Json(property))
}

/// POST /api/properties - 创建房产 (id 由服务端生成)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PropertyDraft>,
) -> AppResult<Json<Property>> {
    let repo = PropertyRepository::new(state.db.clone());
    let property = repo.create(payload).await?;
    tracing::info!(id = %property.id, "Property created");
    Ok(Json(property))
}

/// PUT /api/properties/{id} - 整体替换
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PropertyDraft>,
) -> AppResult<Json<Property>> {
    let repo = PropertyRepository::new(state.db.clone());
    let property = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::property_not_found(&id))?;
    Ok(Json(property))
}

/// DELETE /api/properties/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = PropertyRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::property_not_found(&id));
    }
    tracing::info!(id = %id, "Property deleted");
    Ok(Json(MessageResponse::new("Property deleted successfully")))
}

/// POST /api/properties/bulk - 清空后按顺序写入，全部重新分配 id
pub async fn bulk_replace(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<Vec<PropertyDraft>>,
) -> AppResult<Json<MessageResponse>> {
    let repo = PropertyRepository::new(state.db.clone());
    let saved = repo.replace_all_drafts(payload).await?;
    tracing::info!(count = saved.len(), "Properties replaced");
    Ok(Json(MessageResponse::new(format!(
        "{} properties saved",
        saved.len()
    ))))
}
