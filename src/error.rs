//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Failure at one stage of a store operation. The wrapped sqlx error is kept as-is.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connect: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("begin transaction: {0}")]
    Begin(#[source] sqlx::Error),
    /// Covers statement preparation as well; sqlx prepares on first execute.
    #[error("execute: {0}")]
    Execute(#[source] sqlx::Error),
    #[error("commit: {0}")]
    Commit(#[source] sqlx::Error),
    #[error("query: {0}")]
    Query(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("decode: {0}")]
    Decode(String),
    #[error("store write failed: {0}")]
    Write(#[source] StoreError),
    #[error("store read failed: {0}")]
    Read(#[source] StoreError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Decode(_) | AppError::Write(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "decode_error",
            AppError::Write(_) => "store_write_error",
            AppError::Read(_) => "store_read_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
