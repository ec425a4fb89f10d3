//! JSON request body decoded regardless of `Content-Type`, with failures mapped to [`AppError::Decode`].

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but does not require an `application/json` content type; browser clients
/// posting a plain string body are accepted as long as the body parses.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Decode(rejection.body_text()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(JsonBody(value))
    }
}
