//! Modelo de la cola de sincronización
//!
//! Operaciones pendientes persistidas para un proceso de sincronización
//! externo. Este servicio solo encola, lista, reintenta y elimina.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de entidad afectada - mapea al ENUM sync_entity_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "sync_entity_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SyncEntityType {
    Driver,
    Vehicle,
    Trip,
    Subcontractor,
    Mission,
}

/// Tipo de operación pendiente - mapea al ENUM sync_op_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "sync_op_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SyncOpKind {
    Create,
    Update,
    Delete,
}

/// Operación pendiente de sincronización - mapea a la tabla sync_queue
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SyncOperation {
    pub id: Uuid,
    pub entity_type: SyncEntityType,
    pub op: SyncOpKind,
    pub entity_id: Uuid,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub retry_count: i32,
}
