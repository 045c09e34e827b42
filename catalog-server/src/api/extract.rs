//! JSON Body Extractor
//!
//! `axum::Json` with rejections rendered as [`AppError`]

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::AppError;

/// JSON request body
///
/// A body that does not fit `T` is answered with the usual
/// `{code, message}` error body instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
