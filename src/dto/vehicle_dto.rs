use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{FuelType, Vehicle, VehicleFilters, VehicleStatus};
use crate::query::{pagination::DEFAULT_PAGE_SIZE, PageRequest};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub plate_number: String,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    pub fuel_type: Option<FuelType>,
    pub odometer_km: Option<Decimal>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub plate_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    pub fuel_type: Option<FuelType>,
    pub odometer_km: Option<Decimal>,
    pub status: Option<VehicleStatus>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub plate_number: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: FuelType,
    pub odometer_km: Decimal,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate_number: vehicle.plate_number,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            fuel_type: vehicle.fuel_type,
            odometer_km: vehicle.odometer_km,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}

/// Parámetros de listado vía query-string
#[derive(Debug, Deserialize)]
pub struct VehicleListParams {
    pub q: Option<String>,
    pub status: Option<VehicleStatus>,
    pub fuel_type: Option<FuelType>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl VehicleListParams {
    pub fn filters(&self) -> VehicleFilters {
        VehicleFilters {
            q: self.q.clone(),
            status: self.status,
            fuel_type: self.fuel_type,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
