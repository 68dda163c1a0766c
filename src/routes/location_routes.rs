use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::location_controller::LocationController;
use crate::dto::common::ApiResponse;
use crate::models::location::Location;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
}

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_location))
        .route("/", get(list_locations))
        .route("/:id", get(get_location))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<Json<ApiResponse<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.create(request.name).await?;
    Ok(Json(response))
}

async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
