use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::mission::{Mission, MissionFilters, MissionStatus};
use crate::query::{pagination::DEFAULT_PAGE_SIZE, PageRequest};
use crate::stats::{payment_status, PaymentStatus};

// Request para crear una misión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    pub subcontractor_id: Uuid,
    pub mission_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub container_type: String,

    #[validate(range(min = 1))]
    pub quantity: i32,

    pub amount_total: Decimal,
    pub amount_90_percent: Decimal,
    pub amount_10_percent: Decimal,
}

// Request para actualizar una misión, pagos incluidos
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMissionRequest {
    pub mission_date: Option<NaiveDate>,
    pub origin_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,

    #[validate(length(min = 1, max = 50))]
    pub container_type: Option<String>,

    #[validate(range(min = 1))]
    pub quantity: Option<i32>,

    pub amount_total: Option<Decimal>,
    pub amount_90_percent: Option<Decimal>,
    pub amount_10_percent: Option<Decimal>,
    pub advance_paid: Option<bool>,
    pub balance_paid: Option<bool>,
    pub advance_paid_at: Option<NaiveDate>,
    pub balance_paid_at: Option<NaiveDate>,
    pub status: Option<MissionStatus>,
}

// Response de misión; el estado de pago es un campo derivado
#[derive(Debug, Serialize)]
pub struct MissionResponse {
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
    pub payment_status: PaymentStatus,
    pub status: MissionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Mission> for MissionResponse {
    fn from(mission: Mission) -> Self {
        Self {
            id: mission.id,
            subcontractor_id: mission.subcontractor_id,
            mission_date: mission.mission_date,
            origin_id: mission.origin_id,
            destination_id: mission.destination_id,
            container_type: mission.container_type,
            quantity: mission.quantity,
            amount_total: mission.amount_total,
            amount_90_percent: mission.amount_90_percent,
            amount_10_percent: mission.amount_10_percent,
            advance_paid: mission.advance_paid,
            balance_paid: mission.balance_paid,
            advance_paid_at: mission.advance_paid_at,
            balance_paid_at: mission.balance_paid_at,
            payment_status: payment_status(mission.advance_paid, mission.balance_paid),
            status: mission.status,
            created_at: mission.created_at,
        }
    }
}

/// Parámetros de listado vía query-string
#[derive(Debug, Deserialize)]
pub struct MissionListParams {
    pub subcontractor_id: Option<Uuid>,
    pub status: Option<MissionStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl MissionListParams {
    pub fn filters(&self) -> MissionFilters {
        MissionFilters {
            subcontractor_id: self.subcontractor_id,
            status: self.status,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_response_derives_payment_status() {
        let mission = Mission {
            id: Uuid::new_v4(),
            subcontractor_id: Uuid::new_v4(),
            mission_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            origin_id: Uuid::new_v4(),
            destination_id: Uuid::new_v4(),
            container_type: "40ft".to_string(),
            quantity: 2,
            amount_total: Decimal::from(1000),
            amount_90_percent: Decimal::from(900),
            amount_10_percent: Decimal::from(100),
            advance_paid: true,
            balance_paid: false,
            advance_paid_at: Some(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()),
            balance_paid_at: None,
            status: MissionStatus::Ongoing,
            created_at: Utc::now(),
        };

        let response = MissionResponse::from(mission);
        assert_eq!(response.payment_status, PaymentStatus::Partial);
    }
}
