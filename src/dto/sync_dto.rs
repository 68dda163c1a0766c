use serde::Deserialize;
use uuid::Uuid;

use crate::models::sync::{SyncEntityType, SyncOpKind};

// Request para encolar una operación pendiente
#[derive(Debug, Deserialize)]
pub struct EnqueueSyncRequest {
    pub entity_type: SyncEntityType,
    pub op: SyncOpKind,
    pub entity_id: Uuid,
    pub payload: serde_json::Value,
}

/// Filtro opcional del listado de pendientes
#[derive(Debug, Deserialize)]
pub struct SyncPendingParams {
    pub entity_type: Option<SyncEntityType>,
}
