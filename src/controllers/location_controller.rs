use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::models::location::Location;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn create(&self, name: String) -> AppResult<ApiResponse<Location>> {
        validate_not_empty(&name)
            .map_err(|_| AppError::BadRequest("Location name is required".to_string()))?;

        if self.repository.name_exists(&name).await? {
            return Err(AppError::Conflict(
                "A location with this name already exists".to_string(),
            ));
        }

        let location = self.repository.create(name).await?;
        Ok(ApiResponse::success_with_message(
            location,
            "Location created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Location> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))
    }
}
