use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::sync_controller::SyncController;
use crate::dto::common::ApiResponse;
use crate::dto::sync_dto::{EnqueueSyncRequest, SyncPendingParams};
use crate::models::sync::SyncOperation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_sync_router() -> Router<AppState> {
    Router::new()
        .route("/queue", post(enqueue_operation))
        .route("/pending", get(list_pending))
        .route("/:id/retry", post(retry_operation))
        .route("/:id", delete(remove_operation))
}

async fn enqueue_operation(
    State(state): State<AppState>,
    Json(request): Json<EnqueueSyncRequest>,
) -> Result<Json<ApiResponse<SyncOperation>>, AppError> {
    let controller = SyncController::new(state.pool.clone());
    let response = controller.enqueue(request).await?;
    Ok(Json(response))
}

async fn list_pending(
    State(state): State<AppState>,
    Query(params): Query<SyncPendingParams>,
) -> Result<Json<Vec<SyncOperation>>, AppError> {
    let controller = SyncController::new(state.pool.clone());
    let response = controller.pending(params.entity_type).await?;
    Ok(Json(response))
}

async fn retry_operation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SyncOperation>>, AppError> {
    let controller = SyncController::new(state.pool.clone());
    let response = controller.retry(id).await?;
    Ok(Json(response))
}

async fn remove_operation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SyncController::new(state.pool.clone());
    controller.remove(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sync operation removed successfully"
    })))
}
