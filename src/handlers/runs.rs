//! Run handlers: list, add/update (one upsert behind two paths), delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{IdContainer, Run};
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /api/runs
pub async fn list_runs(State(state): State<AppState>) -> Result<Json<Vec<Run>>, AppError> {
    let runs = state.repository.list_runs().await.map_err(AppError::Read)?;
    Ok(Json(runs))
}

/// POST /api/runs/add and /api/runs/update. Whether this inserts or updates depends only on `id`.
pub async fn upsert_run(
    State(state): State<AppState>,
    JsonBody(run): JsonBody<Run>,
) -> Result<Json<Run>, AppError> {
    let stored = state.repository.upsert_run(run).await.map_err(AppError::Write)?;
    Ok(Json(stored))
}

/// POST /api/runs/delete
pub async fn delete_run(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IdContainer>,
) -> Result<&'static str, AppError> {
    state
        .repository
        .delete_run(body.id)
        .await
        .map_err(AppError::Write)?;
    Ok("Deleted")
}
