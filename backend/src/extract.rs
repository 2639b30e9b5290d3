//! Request extractors

use crate::error::ApiError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is an [`ApiError`]
///
/// A body that is not JSON, or does not fit `T`, is answered with the
/// usual `{"error": ...}` shape instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
