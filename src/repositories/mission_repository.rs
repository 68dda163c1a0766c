use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::mission::{Mission, MissionFilters, MissionStatus};
use crate::query::{PageFetcher, PageRequest, Paginated};
use crate::utils::errors::{AppError, AppResult};

/// Datos de alta de una misión
pub struct NewMission {
    pub subcontractor_id: Uuid,
    pub mission_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub container_type: String,
    pub quantity: i32,
    pub amount_total: Decimal,
    pub amount_90_percent: Decimal,
    pub amount_10_percent: Decimal,
}

/// Cambios parciales de una misión. Las fechas de pago las resuelve el
/// caller cuando cambian los flags.
pub struct MissionChanges {
    pub mission_date: Option<NaiveDate>,
    pub origin_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,
    pub container_type: Option<String>,
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

pub struct MissionRepository {
    pool: PgPool,
}

fn push_filters(query: &mut QueryBuilder<Postgres>, filters: &MissionFilters) {
    if let Some(subcontractor_id) = filters.subcontractor_id {
        query
            .push(" AND subcontractor_id = ")
            .push_bind(subcontractor_id);
    }
    if let Some(status) = filters.status {
        query.push(" AND status = ").push_bind(status);
    }
    if let Some(date_from) = filters.date_from {
        query.push(" AND mission_date >= ").push_bind(date_from);
    }
    if let Some(date_to) = filters.date_to {
        query.push(" AND mission_date <= ").push_bind(date_to);
    }
}

impl MissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_page(
        &self,
        filters: &MissionFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Mission>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM missions WHERE 1=1");
        push_filters(&mut count_query, filters);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting missions: {}", e)))?;

        let mut data_query = QueryBuilder::new("SELECT * FROM missions WHERE 1=1");
        push_filters(&mut data_query, filters);
        data_query
            .push(" ORDER BY mission_date DESC, created_at DESC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let missions = data_query
            .build_query_as::<Mission>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing missions: {}", e)))?;

        Ok(Paginated::new(missions, count, page))
    }

    pub async fn create(&self, new_mission: NewMission) -> AppResult<Mission> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            INSERT INTO missions (
                id, subcontractor_id, mission_date, origin_id, destination_id,
                container_type, quantity, amount_total, amount_90_percent, amount_10_percent,
                advance_paid, balance_paid, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, FALSE, FALSE, 'ongoing', $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_mission.subcontractor_id)
        .bind(new_mission.mission_date)
        .bind(new_mission.origin_id)
        .bind(new_mission.destination_id)
        .bind(new_mission.container_type)
        .bind(new_mission.quantity)
        .bind(new_mission.amount_total)
        .bind(new_mission.amount_90_percent)
        .bind(new_mission.amount_10_percent)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating mission: {}", e)))?;

        Ok(mission)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mission>> {
        let mission = sqlx::query_as::<_, Mission>("SELECT * FROM missions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding mission: {}", e)))?;

        Ok(mission)
    }

    /// Misiones de un subcontratista para el rollup financiero
    pub async fn find_by_subcontractor(&self, subcontractor_id: Uuid) -> AppResult<Vec<Mission>> {
        let missions = sqlx::query_as::<_, Mission>(
            "SELECT * FROM missions WHERE subcontractor_id = $1 ORDER BY mission_date DESC",
        )
        .bind(subcontractor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing missions: {}", e)))?;

        Ok(missions)
    }

    pub async fn update(&self, id: Uuid, changes: MissionChanges) -> AppResult<Mission> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE missions
            SET mission_date = $2, origin_id = $3, destination_id = $4, container_type = $5,
                quantity = $6, amount_total = $7, amount_90_percent = $8, amount_10_percent = $9,
                advance_paid = $10, balance_paid = $11, advance_paid_at = $12,
                balance_paid_at = $13, status = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.mission_date.unwrap_or(current.mission_date))
        .bind(changes.origin_id.unwrap_or(current.origin_id))
        .bind(changes.destination_id.unwrap_or(current.destination_id))
        .bind(changes.container_type.unwrap_or(current.container_type))
        .bind(changes.quantity.unwrap_or(current.quantity))
        .bind(changes.amount_total.unwrap_or(current.amount_total))
        .bind(changes.amount_90_percent.unwrap_or(current.amount_90_percent))
        .bind(changes.amount_10_percent.unwrap_or(current.amount_10_percent))
        .bind(changes.advance_paid.unwrap_or(current.advance_paid))
        .bind(changes.balance_paid.unwrap_or(current.balance_paid))
        .bind(changes.advance_paid_at.or(current.advance_paid_at))
        .bind(changes.balance_paid_at.or(current.balance_paid_at))
        .bind(changes.status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating mission: {}", e)))?;

        Ok(mission)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting mission: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Mission not found".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageFetcher<MissionFilters, Mission> for MissionRepository {
    async fn fetch_page(
        &self,
        filters: &MissionFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Mission>> {
        MissionRepository::fetch_page(self, filters, page).await
    }
}
