//! Modelo de Trip
//!
//! Un trip es un trayecto entre dos ubicaciones con un par
//! conductor/vehículo, con seguimiento de combustible y costes.
//! El consumo por 100 km se calcula en el momento de la escritura.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del trip - mapea al ENUM trip_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "trip_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Estado de entrega de un contenedor - mapea al ENUM container_delivery_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "container_delivery_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContainerDeliveryStatus {
    Pending,
    Delivered,
    Returned,
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub trip_number: String,
    pub trip_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub distance_km: Decimal,
    pub fuel_planned_liters: Decimal,
    pub fuel_actual_liters: Decimal,
    pub fuel_price: Decimal,
    pub consumption_per_100km: Option<Decimal>,
    pub toll_costs: Decimal,
    pub other_costs: Decimal,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

/// Contenedor asociado a un trip - mapea a la tabla trip_containers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TripContainer {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub container_type: String,
    pub quantity: i32,
    pub delivery_status: ContainerDeliveryStatus,
}

/// Filtros para búsqueda de trips
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripFilters {
    pub q: Option<String>,
    pub status: Option<TripStatus>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
