use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::mission_dto::{
    CreateMissionRequest, MissionListParams, MissionResponse, UpdateMissionRequest,
};
use crate::repositories::location_repository::LocationRepository;
use crate::repositories::mission_repository::{MissionChanges, MissionRepository, NewMission};
use crate::repositories::subcontractor_repository::SubcontractorRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_non_negative, validate_positive};

pub struct MissionController {
    repository: MissionRepository,
    subcontractors: SubcontractorRepository,
    locations: LocationRepository,
}

impl MissionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MissionRepository::new(pool.clone()),
            subcontractors: SubcontractorRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMissionRequest,
    ) -> AppResult<ApiResponse<MissionResponse>> {
        request.validate()?;

        if request.origin_id == request.destination_id {
            return Err(AppError::BadRequest(
                "Origin and destination must differ".to_string(),
            ));
        }

        validate_positive(request.amount_total)
            .map_err(|_| AppError::BadRequest("Total amount must be positive".to_string()))?;
        validate_non_negative(request.amount_90_percent)
            .map_err(|_| AppError::BadRequest("Advance tranche cannot be negative".to_string()))?;
        validate_non_negative(request.amount_10_percent)
            .map_err(|_| AppError::BadRequest("Balance tranche cannot be negative".to_string()))?;

        if self
            .subcontractors
            .find_by_id(request.subcontractor_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Subcontractor not found".to_string()));
        }
        self.check_locations(request.origin_id, request.destination_id).await?;

        let mission = self
            .repository
            .create(NewMission {
                subcontractor_id: request.subcontractor_id,
                mission_date: request.mission_date,
                origin_id: request.origin_id,
                destination_id: request.destination_id,
                container_type: request.container_type,
                quantity: request.quantity,
                amount_total: request.amount_total,
                amount_90_percent: request.amount_90_percent,
                amount_10_percent: request.amount_10_percent,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            MissionResponse::from(mission),
            "Mission created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        params: MissionListParams,
    ) -> AppResult<PaginatedResponse<MissionResponse>> {
        let page = self.repository.fetch_page(&params.filters(), params.page()).await?;
        Ok(PaginatedResponse::from_page(page, MissionResponse::from))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MissionResponse> {
        let mission = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        Ok(MissionResponse::from(mission))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMissionRequest,
    ) -> AppResult<ApiResponse<MissionResponse>> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        let origin_id = request.origin_id.unwrap_or(current.origin_id);
        let destination_id = request.destination_id.unwrap_or(current.destination_id);
        if origin_id == destination_id {
            return Err(AppError::BadRequest(
                "Origin and destination must differ".to_string(),
            ));
        }
        if request.origin_id.is_some() || request.destination_id.is_some() {
            self.check_locations(origin_id, destination_id).await?;
        }

        if let Some(amount_total) = request.amount_total {
            validate_positive(amount_total)
                .map_err(|_| AppError::BadRequest("Total amount must be positive".to_string()))?;
        }

        // Al marcar un tramo como pagado sin fecha explícita se sella
        // con la fecha del día
        let today = Utc::now().date_naive();
        let advance_paid_at = match (request.advance_paid, request.advance_paid_at) {
            (Some(true), None) if !current.advance_paid => Some(today),
            (_, explicit) => explicit,
        };
        let balance_paid_at = match (request.balance_paid, request.balance_paid_at) {
            (Some(true), None) if !current.balance_paid => Some(today),
            (_, explicit) => explicit,
        };

        let mission = self
            .repository
            .update(
                id,
                MissionChanges {
                    mission_date: request.mission_date,
                    origin_id: request.origin_id,
                    destination_id: request.destination_id,
                    container_type: request.container_type,
                    quantity: request.quantity,
                    amount_total: request.amount_total,
                    amount_90_percent: request.amount_90_percent,
                    amount_10_percent: request.amount_10_percent,
                    advance_paid: request.advance_paid,
                    balance_paid: request.balance_paid,
                    advance_paid_at,
                    balance_paid_at,
                    status: request.status,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MissionResponse::from(mission),
            "Mission updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }

    async fn check_locations(&self, origin_id: Uuid, destination_id: Uuid) -> AppResult<()> {
        let (origin, destination) = futures::try_join!(
            self.locations.find_by_id(origin_id),
            self.locations.find_by_id(destination_id),
        )?;
        if origin.is_none() {
            return Err(AppError::BadRequest("Origin location does not exist".to_string()));
        }
        if destination.is_none() {
            return Err(AppError::BadRequest(
                "Destination location does not exist".to_string(),
            ));
        }
        Ok(())
    }
}
