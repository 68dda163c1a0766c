use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::subcontractor::{Subcontractor, SubcontractorFilters, SubcontractorStatus};
use crate::query::{PageFetcher, PageRequest, Paginated};
use crate::utils::errors::{AppError, AppResult};

pub struct SubcontractorRepository {
    pool: PgPool,
}

fn push_filters(query: &mut QueryBuilder<Postgres>, filters: &SubcontractorFilters) {
    if let Some(q) = &filters.q {
        let pattern = format!("%{}%", q);
        query
            .push(" AND (company_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR contact_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR phone ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(status) = filters.status {
        query.push(" AND status = ").push_bind(status);
    }
}

impl SubcontractorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_page(
        &self,
        filters: &SubcontractorFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Subcontractor>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM subcontractors WHERE 1=1");
        push_filters(&mut count_query, filters);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting subcontractors: {}", e)))?;

        let mut data_query = QueryBuilder::new("SELECT * FROM subcontractors WHERE 1=1");
        push_filters(&mut data_query, filters);
        data_query
            .push(" ORDER BY company_name LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let subcontractors = data_query
            .build_query_as::<Subcontractor>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing subcontractors: {}", e)))?;

        Ok(Paginated::new(subcontractors, count, page))
    }

    pub async fn create(
        &self,
        company_name: String,
        contact_name: Option<String>,
        phone: Option<String>,
    ) -> AppResult<Subcontractor> {
        let subcontractor = sqlx::query_as::<_, Subcontractor>(
            r#"
            INSERT INTO subcontractors (id, company_name, contact_name, phone, status, created_at)
            VALUES ($1, $2, $3, $4, 'active', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_name)
        .bind(contact_name)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating subcontractor: {}", e)))?;

        Ok(subcontractor)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subcontractor>> {
        let subcontractor =
            sqlx::query_as::<_, Subcontractor>("SELECT * FROM subcontractors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error finding subcontractor: {}", e)))?;

        Ok(subcontractor)
    }

    pub async fn company_name_exists(&self, company_name: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM subcontractors WHERE company_name = $1)")
                .bind(company_name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking company name: {}", e)))?;

        Ok(result.0)
    }

    /// Misiones que referencian al subcontratista; bloquea su borrado
    pub async fn mission_count(&self, id: Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM missions WHERE subcontractor_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error counting missions: {}", e)))?;

        Ok(count)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_name: Option<String>,
        contact_name: Option<String>,
        phone: Option<String>,
        status: Option<SubcontractorStatus>,
    ) -> AppResult<Subcontractor> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subcontractor not found".to_string()))?;

        let subcontractor = sqlx::query_as::<_, Subcontractor>(
            r#"
            UPDATE subcontractors
            SET company_name = $2, contact_name = $3, phone = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_name.unwrap_or(current.company_name))
        .bind(contact_name.or(current.contact_name))
        .bind(phone.or(current.phone))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating subcontractor: {}", e)))?;

        Ok(subcontractor)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM subcontractors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting subcontractor: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Subcontractor not found".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageFetcher<SubcontractorFilters, Subcontractor> for SubcontractorRepository {
    async fn fetch_page(
        &self,
        filters: &SubcontractorFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Subcontractor>> {
        SubcontractorRepository::fetch_page(self, filters, page).await
    }
}
