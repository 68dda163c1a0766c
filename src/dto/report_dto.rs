use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipos de informe disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    DriverStatusDistribution,
    ContainerTypeDistribution,
    VehicleConsumption,
    TripVolume,
    FuelCost,
    SubcontractorFinancials,
}

/// Cuerpo del endpoint de informes: tipo, rango de fechas ISO-8601 y
/// filtros de entidad opcionales
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub subcontractor_id: Option<Uuid>,
    pub limit: Option<usize>,
}
