//! Run and route API under `/api`.

use crate::handlers::{delete_run, list_routes, list_runs, upsert_route, upsert_run};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/runs", get(list_runs))
        .route("/runs/add", post(upsert_run))
        .route("/runs/update", post(upsert_run))
        .route("/runs/delete", post(delete_run))
        .route("/routes", get(list_routes))
        .route("/routes/add", post(upsert_route))
        .with_state(state)
}
