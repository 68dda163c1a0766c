use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::sync::{SyncEntityType, SyncOpKind, SyncOperation};
use crate::utils::errors::{AppError, AppResult};

/// Cola persistida de operaciones pendientes de sincronización.
/// El proceso consumidor es externo; aquí solo se gestiona la cola.
pub struct SyncQueueRepository {
    pool: PgPool,
}

impl SyncQueueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn enqueue(
        &self,
        entity_type: SyncEntityType,
        op: SyncOpKind,
        entity_id: Uuid,
        payload: serde_json::Value,
    ) -> AppResult<SyncOperation> {
        let operation = sqlx::query_as::<_, SyncOperation>(
            r#"
            INSERT INTO sync_queue (id, entity_type, op, entity_id, payload, created_at, retry_count)
            VALUES ($1, $2, $3, $4, $5, $6, 0)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entity_type)
        .bind(op)
        .bind(entity_id)
        .bind(payload)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error enqueuing sync operation: {}", e)))?;

        Ok(operation)
    }

    /// Operaciones pendientes en orden FIFO, opcionalmente por entidad
    pub async fn pending(
        &self,
        entity_type: Option<SyncEntityType>,
    ) -> AppResult<Vec<SyncOperation>> {
        let operations = match entity_type {
            Some(entity_type) => {
                sqlx::query_as::<_, SyncOperation>(
                    "SELECT * FROM sync_queue WHERE entity_type = $1 ORDER BY created_at",
                )
                .bind(entity_type)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SyncOperation>("SELECT * FROM sync_queue ORDER BY created_at")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::Database(format!("Error listing sync operations: {}", e)))?;

        Ok(operations)
    }

    pub async fn bump_retry(&self, id: Uuid) -> AppResult<SyncOperation> {
        let operation = sqlx::query_as::<_, SyncOperation>(
            "UPDATE sync_queue SET retry_count = retry_count + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating sync operation: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Sync operation not found".to_string()))?;

        Ok(operation)
    }

    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sync_queue WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting sync operation: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sync operation not found".to_string()));
        }
        Ok(())
    }
}
