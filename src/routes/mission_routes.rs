use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::mission_controller::MissionController;
use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::mission_dto::{
    CreateMissionRequest, MissionListParams, MissionResponse, UpdateMissionRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mission_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mission))
        .route("/", get(list_missions))
        .route("/:id", get(get_mission))
        .route("/:id", put(update_mission))
        .route("/:id", delete(delete_mission))
}

async fn create_mission(
    State(state): State<AppState>,
    Json(request): Json<CreateMissionRequest>,
) -> Result<Json<ApiResponse<MissionResponse>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_missions(
    State(state): State<AppState>,
    Query(params): Query<MissionListParams>,
) -> Result<Json<PaginatedResponse<MissionResponse>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MissionResponse>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMissionRequest>,
) -> Result<Json<ApiResponse<MissionResponse>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mission deleted successfully"
    })))
}
