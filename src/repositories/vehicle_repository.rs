use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::vehicle::{FuelType, Vehicle, VehicleFilters, VehicleStatus};
use crate::query::{PageFetcher, PageRequest, Paginated};
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

fn push_filters(query: &mut QueryBuilder<Postgres>, filters: &VehicleFilters) {
    if let Some(q) = &filters.q {
        let pattern = format!("%{}%", q);
        query
            .push(" AND (plate_number ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR make ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR model ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(status) = filters.status {
        query.push(" AND status = ").push_bind(status);
    }
    if let Some(fuel_type) = filters.fuel_type {
        query.push(" AND fuel_type = ").push_bind(fuel_type);
    }
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_page(
        &self,
        filters: &VehicleFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Vehicle>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM vehicles WHERE 1=1");
        push_filters(&mut count_query, filters);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting vehicles: {}", e)))?;

        let mut data_query = QueryBuilder::new("SELECT * FROM vehicles WHERE 1=1");
        push_filters(&mut data_query, filters);
        data_query
            .push(" ORDER BY plate_number LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let vehicles = data_query
            .build_query_as::<Vehicle>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing vehicles: {}", e)))?;

        Ok(Paginated::new(vehicles, count, page))
    }

    pub async fn create(
        &self,
        plate_number: String,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        fuel_type: FuelType,
        odometer_km: Decimal,
    ) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, plate_number, make, model, year, fuel_type, odometer_km, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate_number)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(fuel_type)
        .bind(odometer_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn plate_number_exists(&self, plate_number: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate_number = $1)")
                .bind(plate_number)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking plate number: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        plate_number: Option<String>,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        fuel_type: Option<FuelType>,
        odometer_km: Option<Decimal>,
        status: Option<VehicleStatus>,
    ) -> AppResult<Vehicle> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate_number = $2, make = $3, model = $4, year = $5, fuel_type = $6, odometer_km = $7, status = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate_number.unwrap_or(current.plate_number))
        .bind(make.or(current.make))
        .bind(model.or(current.model))
        .bind(year.or(current.year))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(odometer_km.unwrap_or(current.odometer_km))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageFetcher<VehicleFilters, Vehicle> for VehicleRepository {
    async fn fetch_page(
        &self,
        filters: &VehicleFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Vehicle>> {
        VehicleRepository::fetch_page(self, filters, page).await
    }
}
