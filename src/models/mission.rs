//! Modelo de Mission
//!
//! Una misión es un trabajo de transporte asignado a un subcontratista
//! externo, facturado en dos tramos: 90% de anticipo y 10% de saldo.
//! Se asume amount_90_percent + amount_10_percent == amount_total;
//! no hay constraint almacenado que lo imponga.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la misión - mapea al ENUM mission_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "mission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Ongoing,
    Completed,
    Cancelled,
}

/// Mission principal - mapea exactamente a la tabla missions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mission {
    pub id: Uuid,
    pub subcontractor_id: Uuid,
    pub mission_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub container_type: String,
    pub quantity: i32,
    pub amount_total: Decimal,
    pub amount_90_percent: Decimal,
    pub amount_10_percent: Decimal,
    pub advance_paid: bool,
    pub balance_paid: bool,
    pub advance_paid_at: Option<NaiveDate>,
    pub balance_paid_at: Option<NaiveDate>,
    pub status: MissionStatus,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de misiones
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MissionFilters {
    pub subcontractor_id: Option<Uuid>,
    pub status: Option<MissionStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
