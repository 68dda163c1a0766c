use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::driver::{Driver, DriverFilters, DriverStatus};
use crate::query::{PageFetcher, PageRequest, Paginated};
use crate::utils::errors::{AppError, AppResult};

pub struct DriverRepository {
    pool: PgPool,
}

fn push_filters(query: &mut QueryBuilder<Postgres>, filters: &DriverFilters) {
    if let Some(q) = &filters.q {
        let pattern = format!("%{}%", q);
        query
            .push(" AND (last_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR phone ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(status) = filters.status {
        query.push(" AND status = ").push_bind(status);
    }
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_page(
        &self,
        filters: &DriverFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Driver>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM drivers WHERE 1=1");
        push_filters(&mut count_query, filters);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting drivers: {}", e)))?;

        let mut data_query = QueryBuilder::new("SELECT * FROM drivers WHERE 1=1");
        push_filters(&mut data_query, filters);
        data_query
            .push(" ORDER BY last_name, first_name LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let drivers = data_query
            .build_query_as::<Driver>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing drivers: {}", e)))?;

        Ok(Paginated::new(drivers, count, page))
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        phone: String,
        license_number: String,
        hire_date: NaiveDate,
    ) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, first_name, last_name, phone, license_number, hire_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'active', $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .bind(license_number)
        .bind(hire_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding driver: {}", e)))?;

        Ok(driver)
    }

    /// Filas completas para las estadísticas de distribución de estado
    pub async fn list_all(&self) -> AppResult<Vec<Driver>> {
        let drivers =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY last_name, first_name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error listing drivers: {}", e)))?;

        Ok(drivers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
        license_number: Option<String>,
        hire_date: Option<NaiveDate>,
        status: Option<DriverStatus>,
    ) -> AppResult<Driver> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET first_name = $2, last_name = $3, phone = $4, license_number = $5, hire_date = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name.unwrap_or(current.first_name))
        .bind(last_name.unwrap_or(current.last_name))
        .bind(phone.unwrap_or(current.phone))
        .bind(license_number.unwrap_or(current.license_number))
        .bind(hire_date.unwrap_or(current.hire_date))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating driver: {}", e)))?;

        Ok(driver)
    }

    /// Baja lógica: los conductores nunca se eliminan físicamente
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET status = 'inactive' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error deactivating driver: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver)
    }
}

#[async_trait]
impl PageFetcher<DriverFilters, Driver> for DriverRepository {
    async fn fetch_page(
        &self,
        filters: &DriverFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Driver>> {
        DriverRepository::fetch_page(self, filters, page).await
    }
}
