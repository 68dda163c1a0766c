use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::{Driver, DriverFilters, DriverStatus};
use crate::query::{pagination::DEFAULT_PAGE_SIZE, PageRequest};

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(min = 8, max = 20))]
    pub phone: String,

    #[validate(length(min = 3, max = 50))]
    pub license_number: String,

    pub hire_date: NaiveDate,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 3, max = 50))]
    pub license_number: Option<String>,

    pub hire_date: Option<NaiveDate>,
    pub status: Option<DriverStatus>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub license_number: String,
    pub hire_date: NaiveDate,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            phone: driver.phone,
            license_number: driver.license_number,
            hire_date: driver.hire_date,
            status: driver.status,
            created_at: driver.created_at,
        }
    }
}

/// Parámetros de listado vía query-string
#[derive(Debug, Deserialize)]
pub struct DriverListParams {
    pub q: Option<String>,
    pub status: Option<DriverStatus>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl DriverListParams {
    pub fn filters(&self) -> DriverFilters {
        DriverFilters {
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
