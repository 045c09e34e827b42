//! Upload Routes
//!
//! Encodes an uploaded file as an inline `data:` URL. Nothing is written to
//! disk or to the store; the client embeds the URL in a listing's `im`.

use axum::{Json, Router, extract::Multipart, routing::post};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;

/// Content type used when the part does not declare one
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

const FILE_FIELD: &str = "file";

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/upload", post(upload))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: Option<String>,
}

/// POST /api/upload - multipart `file` → `{url, filename}`
async fn upload(mut multipart: Multipart) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let filename = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::invalid_request(format!("Multipart error: {e}")))?;

        tracing::debug!(?filename, %content_type, size = data.len(), "File encoded");

        return Ok(Json(UploadResponse {
            url: to_data_url(&content_type, &data),
            filename,
        }));
    }

    Err(AppError::with_message(
        ErrorCode::NoFileProvided,
        "No 'file' field found. Field name must be 'file'",
    ))
}

fn to_data_url(content_type: &str, data: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(data))
}
