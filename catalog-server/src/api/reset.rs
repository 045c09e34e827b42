//! Reset route
//!
//! `POST /api/reset` wipes both collections and restores the built-in
//! dataset (`p1`..`p12`, `lot1`..`lot8`), whatever was stored before.

use axum::{Json, Router, extract::State, routing::post};
use shared::AppResult;

use crate::api::MessageResponse;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reset", post(reset))
}

async fn reset(State(state): State<ServerState>) -> AppResult<Json<MessageResponse>> {
    state.catalog().reset().await?;
    Ok(Json(MessageResponse::new("Database reset to default data")))
}
