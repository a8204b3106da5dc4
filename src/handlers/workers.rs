use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::{AppJson, AppQuery, CreatedResponse};
use crate::entities::worker;
use crate::error::AppResult;
use crate::services::query::{self, WorkerFilter};
use crate::services::workers::{self, RegisterWorkerRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WorkersResponse {
    pub success: bool,
    pub workers: Vec<worker::Model>,
}

/// Register a worker (status starts as pending)
pub async fn register_worker(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterWorkerRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let db = state.store.acquire().await?;
    let id = workers::register_worker(&db, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Worker registered successfully", id)),
    ))
}

/// List workers, optionally filtered by `service` and `pincode`
pub async fn list_workers(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<WorkerFilter>,
) -> AppResult<Json<WorkersResponse>> {
    let db = state.store.acquire().await?;
    let workers = query::list_workers(&db, filter).await?;

    Ok(Json(WorkersResponse {
        success: true,
        workers,
    }))
}
