use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{ContainerDeliveryStatus, Trip, TripContainer, TripFilters, TripStatus};
use crate::query::{pagination::DEFAULT_PAGE_SIZE, PageRequest};

// Request para crear un trip con sus contenedores
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1, max = 50))]
    pub trip_number: String,

    pub trip_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub distance_km: Decimal,
    pub fuel_planned_liters: Option<Decimal>,
    pub fuel_actual_liters: Option<Decimal>,
    pub fuel_price: Option<Decimal>,
    pub toll_costs: Option<Decimal>,
    pub other_costs: Option<Decimal>,

    #[validate]
    #[serde(default)]
    pub containers: Vec<TripContainerRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TripContainerRequest {
    #[validate(length(min = 1, max = 50))]
    pub container_type: String,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

// Request para actualizar un trip
#[derive(Debug, Deserialize)]
pub struct UpdateTripRequest {
    pub trip_date: Option<NaiveDate>,
    pub origin_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub distance_km: Option<Decimal>,
    pub fuel_planned_liters: Option<Decimal>,
    pub fuel_actual_liters: Option<Decimal>,
    pub fuel_price: Option<Decimal>,
    pub toll_costs: Option<Decimal>,
    pub other_costs: Option<Decimal>,
    pub status: Option<TripStatus>,
}

// Request para actualizar el estado de entrega de un contenedor
#[derive(Debug, Deserialize)]
pub struct UpdateContainerStatusRequest {
    pub delivery_status: ContainerDeliveryStatus,
}

// Response de trip
#[derive(Debug, Serialize)]
pub struct TripResponse {
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

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            trip_number: trip.trip_number,
            trip_date: trip.trip_date,
            origin_id: trip.origin_id,
            destination_id: trip.destination_id,
            driver_id: trip.driver_id,
            vehicle_id: trip.vehicle_id,
            distance_km: trip.distance_km,
            fuel_planned_liters: trip.fuel_planned_liters,
            fuel_actual_liters: trip.fuel_actual_liters,
            fuel_price: trip.fuel_price,
            consumption_per_100km: trip.consumption_per_100km,
            toll_costs: trip.toll_costs,
            other_costs: trip.other_costs,
            status: trip.status,
            created_at: trip.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TripContainerResponse {
    pub id: Uuid,
    pub container_type: String,
    pub quantity: i32,
    pub delivery_status: ContainerDeliveryStatus,
}

impl From<TripContainer> for TripContainerResponse {
    fn from(container: TripContainer) -> Self {
        Self {
            id: container.id,
            container_type: container.container_type,
            quantity: container.quantity,
            delivery_status: container.delivery_status,
        }
    }
}

/// Detalle de trip con sus contenedores
#[derive(Debug, Serialize)]
pub struct TripDetailResponse {
    pub trip: TripResponse,
    pub containers: Vec<TripContainerResponse>,
}

/// Parámetros de listado vía query-string
#[derive(Debug, Deserialize)]
pub struct TripListParams {
    pub q: Option<String>,
    pub status: Option<TripStatus>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl TripListParams {
    pub fn filters(&self) -> TripFilters {
        TripFilters {
            q: self.q.clone(),
            status: self.status,
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            date_from: self.date_from,
            date_to: self.date_to,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
