use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::subcontractor_controller::SubcontractorController;
use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::subcontractor_dto::{
    CreateSubcontractorRequest, SubcontractorFinancialsResponse, SubcontractorListParams,
    SubcontractorResponse, UpdateSubcontractorRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_subcontractor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subcontractor))
        .route("/", get(list_subcontractors))
        .route("/:id", get(get_subcontractor))
        .route("/:id", put(update_subcontractor))
        .route("/:id", delete(delete_subcontractor))
        .route("/:id/financials", get(get_subcontractor_financials))
}

async fn create_subcontractor(
    State(state): State<AppState>,
    Json(request): Json<CreateSubcontractorRequest>,
) -> Result<Json<ApiResponse<SubcontractorResponse>>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_subcontractors(
    State(state): State<AppState>,
    Query(params): Query<SubcontractorListParams>,
) -> Result<Json<PaginatedResponse<SubcontractorResponse>>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_subcontractor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubcontractorResponse>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_subcontractor_financials(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubcontractorFinancialsResponse>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    let response = controller.financials(id).await?;
    Ok(Json(response))
}

async fn update_subcontractor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSubcontractorRequest>,
) -> Result<Json<ApiResponse<SubcontractorResponse>>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

// Bloqueado mientras existan misiones asociadas
async fn delete_subcontractor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SubcontractorController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Subcontractor deleted successfully"
    })))
}
