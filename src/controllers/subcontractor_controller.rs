use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::subcontractor_dto::{
    CreateSubcontractorRequest, SubcontractorFinancialsResponse, SubcontractorListParams,
    SubcontractorResponse, UpdateSubcontractorRequest,
};
use crate::repositories::mission_repository::MissionRepository;
use crate::repositories::subcontractor_repository::SubcontractorRepository;
use crate::stats::financial_rollup;
use crate::utils::errors::{forbidden_error, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct SubcontractorController {
    repository: SubcontractorRepository,
    missions: MissionRepository,
}

impl SubcontractorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SubcontractorRepository::new(pool.clone()),
            missions: MissionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateSubcontractorRequest,
    ) -> AppResult<ApiResponse<SubcontractorResponse>> {
        request.validate()?;
        validate_not_empty(&request.company_name)
            .map_err(|_| AppError::BadRequest("Company name is required".to_string()))?;

        if self.repository.company_name_exists(&request.company_name).await? {
            return Err(AppError::Conflict(
                "A subcontractor with this company name already exists".to_string(),
            ));
        }

        let subcontractor = self
            .repository
            .create(request.company_name, request.contact_name, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            SubcontractorResponse::from(subcontractor),
            "Subcontractor created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        params: SubcontractorListParams,
    ) -> AppResult<PaginatedResponse<SubcontractorResponse>> {
        let page = self.repository.fetch_page(&params.filters(), params.page()).await?;
        Ok(PaginatedResponse::from_page(page, SubcontractorResponse::from))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<SubcontractorResponse> {
        let subcontractor = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subcontractor not found".to_string()))?;

        Ok(SubcontractorResponse::from(subcontractor))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateSubcontractorRequest,
    ) -> AppResult<ApiResponse<SubcontractorResponse>> {
        request.validate()?;

        if let Some(company_name) = &request.company_name {
            let current = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Subcontractor not found".to_string()))?;
            if *company_name != current.company_name
                && self.repository.company_name_exists(company_name).await?
            {
                return Err(AppError::Conflict(
                    "A subcontractor with this company name already exists".to_string(),
                ));
            }
        }

        let subcontractor = self
            .repository
            .update(id, request.company_name, request.contact_name, request.phone, request.status)
            .await?;

        Ok(ApiResponse::success_with_message(
            SubcontractorResponse::from(subcontractor),
            "Subcontractor updated successfully".to_string(),
        ))
    }

    /// Bloqueado mientras existan misiones que lo referencien
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mission_count = self.repository.mission_count(id).await?;
        if mission_count > 0 {
            return Err(forbidden_error(
                "delete subcontractor",
                "existing missions reference it",
            ));
        }

        self.repository.delete(id).await
    }

    pub async fn financials(&self, id: Uuid) -> AppResult<SubcontractorFinancialsResponse> {
        let (subcontractor, missions) = futures::try_join!(
            self.repository.find_by_id(id),
            self.missions.find_by_subcontractor(id),
        )?;
        let subcontractor = subcontractor
            .ok_or_else(|| AppError::NotFound("Subcontractor not found".to_string()))?;

        Ok(SubcontractorFinancialsResponse {
            subcontractor_id: subcontractor.id,
            company_name: subcontractor.company_name,
            financials: financial_rollup(&missions),
        })
    }
}
