//! Route handlers. Routes can be listed, added and updated; there is no delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Route;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /api/routes
pub async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let routes = state.repository.list_routes().await.map_err(AppError::Read)?;
    Ok(Json(routes))
}

/// POST /api/routes/add. Same upsert rule as runs.
pub async fn upsert_route(
    State(state): State<AppState>,
    JsonBody(route): JsonBody<Route>,
) -> Result<Json<Route>, AppError> {
    let stored = state.repository.upsert_route(route).await.map_err(AppError::Write)?;
    Ok(Json(stored))
}
