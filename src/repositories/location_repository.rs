use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::location::Location;
use crate::utils::errors::{AppError, AppResult};

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String) -> AppResult<Location> {
        let location = sqlx::query_as::<_, Location>(
            "INSERT INTO locations (id, name, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating location: {}", e)))?;

        Ok(location)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding location: {}", e)))?;

        Ok(location)
    }

    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM locations WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking location name: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing locations: {}", e)))?;

        Ok(locations)
    }
}
