//! Modelo de Subcontractor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del subcontratista - mapea al ENUM subcontractor_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "subcontractor_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubcontractorStatus {
    Active,
    Inactive,
    Blacklisted,
}

/// Subcontractor principal - mapea exactamente a la tabla subcontractors.
/// El nombre de empresa es clave natural única.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subcontractor {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub status: SubcontractorStatus,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de subcontratistas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubcontractorFilters {
    pub q: Option<String>,
    pub status: Option<SubcontractorStatus>,
}
