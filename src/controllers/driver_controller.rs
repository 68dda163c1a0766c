use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::driver_dto::{CreateDriverRequest, DriverListParams, DriverResponse, UpdateDriverRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_phone;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;
        validate_phone(&request.phone)
            .map_err(|_| AppError::BadRequest("Invalid phone number".to_string()))?;

        let driver = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.phone,
                request.license_number,
                request.hire_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Driver created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        params: DriverListParams,
    ) -> AppResult<PaginatedResponse<DriverResponse>> {
        let page = self.repository.fetch_page(&params.filters(), params.page()).await?;
        Ok(PaginatedResponse::from_page(page, DriverResponse::from))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DriverResponse> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(DriverResponse::from(driver))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;
        if let Some(phone) = &request.phone {
            validate_phone(phone)
                .map_err(|_| AppError::BadRequest("Invalid phone number".to_string()))?;
        }

        let driver = self
            .repository
            .update(
                id,
                request.first_name,
                request.last_name,
                request.phone,
                request.license_number,
                request.hire_date,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Driver updated successfully".to_string(),
        ))
    }

    /// La baja de un conductor es un cambio de estado, nunca un DELETE físico
    pub async fn deactivate(&self, id: Uuid) -> AppResult<ApiResponse<DriverResponse>> {
        let driver = self.repository.deactivate(id).await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Driver deactivated successfully".to_string(),
        ))
    }
}
