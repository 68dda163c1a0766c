use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::sync_dto::EnqueueSyncRequest;
use crate::models::sync::{SyncEntityType, SyncOperation};
use crate::repositories::sync_queue_repository::SyncQueueRepository;
use crate::utils::errors::AppResult;

pub struct SyncController {
    repository: SyncQueueRepository,
}

impl SyncController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SyncQueueRepository::new(pool),
        }
    }

    pub async fn enqueue(
        &self,
        request: EnqueueSyncRequest,
    ) -> AppResult<ApiResponse<SyncOperation>> {
        let operation = self
            .repository
            .enqueue(request.entity_type, request.op, request.entity_id, request.payload)
            .await?;

        Ok(ApiResponse::success_with_message(
            operation,
            "Operation enqueued successfully".to_string(),
        ))
    }

    pub async fn pending(
        &self,
        entity_type: Option<SyncEntityType>,
    ) -> AppResult<Vec<SyncOperation>> {
        self.repository.pending(entity_type).await
    }

    pub async fn retry(&self, id: Uuid) -> AppResult<ApiResponse<SyncOperation>> {
        let operation = self.repository.bump_retry(id).await?;
        Ok(ApiResponse::success(operation))
    }

    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        self.repository.remove(id).await
    }
}
