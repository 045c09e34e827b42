//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`properties`] - 房产 CRUD + 批量替换
//! - [`lots`] - 分块地产 CRUD + 批量替换
//! - [`reset`] - 恢复默认数据
//! - [`upload`] - 文件转 data URL
//! - [`extract`] - JSON 请求体提取器

pub mod extract;
pub mod health;
pub mod lots;
pub mod properties;
pub mod reset;
pub mod upload;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{HeaderName, HeaderValue, Uri};
use serde::{Deserialize, Serialize};
use shared::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub use extract::AppJson;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// `{ "message": "..." }` body returned by delete, bulk and reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(properties::router())
        .merge(lots::router())
        .merge(reset::router())
        .merge(upload::router())
        .fallback(not_found)
}

/// Unknown routes get the JSON error body too
async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the fully configured application
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // Listings carry inline data-URL images; no body cap
        .layer(DefaultBodyLimit::disable())
        // CORS - any origin, method and header
        .layer(CorsLayer::permissive())
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
