use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleListParams, VehicleResponse};
use crate::models::vehicle::FuelType;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_non_negative, validate_plate_number};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;
        validate_plate_number(&request.plate_number)
            .map_err(|_| AppError::BadRequest("Invalid plate number".to_string()))?;

        let odometer_km = request.odometer_km.unwrap_or(Decimal::ZERO);
        validate_non_negative(odometer_km)
            .map_err(|_| AppError::BadRequest("Odometer reading cannot be negative".to_string()))?;

        if self.repository.plate_number_exists(&request.plate_number).await? {
            return Err(AppError::Conflict(
                "A vehicle with this plate number already exists".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.plate_number,
                request.make,
                request.model,
                request.year,
                request.fuel_type.unwrap_or(FuelType::Diesel),
                odometer_km,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        params: VehicleListParams,
    ) -> AppResult<PaginatedResponse<VehicleResponse>> {
        let page = self.repository.fetch_page(&params.filters(), params.page()).await?;
        Ok(PaginatedResponse::from_page(page, VehicleResponse::from))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;
        if let Some(plate_number) = &request.plate_number {
            validate_plate_number(plate_number)
                .map_err(|_| AppError::BadRequest("Invalid plate number".to_string()))?;
        }
        if let Some(odometer_km) = request.odometer_km {
            validate_non_negative(odometer_km).map_err(|_| {
                AppError::BadRequest("Odometer reading cannot be negative".to_string())
            })?;
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.plate_number,
                request.make,
                request.model,
                request.year,
                request.fuel_type,
                request.odometer_km,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
