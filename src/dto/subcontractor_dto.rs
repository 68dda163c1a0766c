use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::subcontractor::{Subcontractor, SubcontractorFilters, SubcontractorStatus};
use crate::query::{pagination::DEFAULT_PAGE_SIZE, PageRequest};
use crate::stats::SubcontractorFinancials;

// Request para crear un subcontratista
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubcontractorRequest {
    #[validate(length(min = 2, max = 150))]
    pub company_name: String,

    #[validate(length(min = 1, max = 100))]
    pub contact_name: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
}

// Request para actualizar un subcontratista
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubcontractorRequest {
    #[validate(length(min = 2, max = 150))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub contact_name: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,

    pub status: Option<SubcontractorStatus>,
}

// Response de subcontratista
#[derive(Debug, Serialize)]
pub struct SubcontractorResponse {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub status: SubcontractorStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Subcontractor> for SubcontractorResponse {
    fn from(subcontractor: Subcontractor) -> Self {
        Self {
            id: subcontractor.id,
            company_name: subcontractor.company_name,
            contact_name: subcontractor.contact_name,
            phone: subcontractor.phone,
            status: subcontractor.status,
            created_at: subcontractor.created_at,
        }
    }
}

/// Rollup financiero de un subcontratista
#[derive(Debug, Serialize)]
pub struct SubcontractorFinancialsResponse {
    pub subcontractor_id: Uuid,
    pub company_name: String,
    pub financials: SubcontractorFinancials,
}

/// Parámetros de listado vía query-string
#[derive(Debug, Deserialize)]
pub struct SubcontractorListParams {
    pub q: Option<String>,
    pub status: Option<SubcontractorStatus>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl SubcontractorListParams {
    pub fn filters(&self) -> SubcontractorFilters {
        SubcontractorFilters {
            q: self.q.clone(),
            status: self.status,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
