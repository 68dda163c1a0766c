//! Modelo de Driver
//!
//! Los conductores nunca se eliminan físicamente: la baja es un
//! cambio de estado a `inactive`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del conductor - mapea al ENUM driver_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "driver_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Active,
    Inactive,
    Suspended,
    OnTrip,
    OnLeave,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
            DriverStatus::Suspended => "suspended",
            DriverStatus::OnTrip => "on_trip",
            DriverStatus::OnLeave => "on_leave",
        }
    }
}

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub license_number: String,
    pub hire_date: NaiveDate,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de conductores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverFilters {
    pub q: Option<String>,
    pub status: Option<DriverStatus>,
}
