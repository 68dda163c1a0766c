use serde_json::json;
use sqlx::PgPool;
use tracing::info;

use crate::dto::report_dto::{ReportRequest, ReportType};
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::mission_repository::MissionRepository;
use crate::repositories::subcontractor_repository::SubcontractorRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::stats::{consumption_ranking, daily_series, distribution, financial_rollup};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_date_range;

const DEFAULT_CONSUMPTION_LIMIT: usize = 5;

/// Genera los documentos de informe del dashboard. Los repositorios
/// traen las filas crudas y el módulo `stats` hace todo el cálculo.
pub struct ReportController {
    drivers: DriverRepository,
    trips: TripRepository,
    missions: MissionRepository,
    subcontractors: SubcontractorRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            missions: MissionRepository::new(pool.clone()),
            subcontractors: SubcontractorRepository::new(pool),
        }
    }

    pub async fn generate(&self, request: ReportRequest) -> AppResult<serde_json::Value> {
        validate_date_range(request.date_from, request.date_to).map_err(|_| {
            AppError::BadRequest("date_from must be on or before date_to".to_string())
        })?;

        info!(
            "Generating report {:?} for {} .. {}",
            request.report_type, request.date_from, request.date_to
        );

        let data = match request.report_type {
            ReportType::DriverStatusDistribution => {
                let drivers = self.drivers.list_all().await?;
                let buckets = distribution(drivers.iter().map(|d| d.status.as_str()));
                json!(buckets)
            }

            ReportType::ContainerTypeDistribution => {
                let labels = self
                    .trips
                    .container_labels(request.date_from, request.date_to)
                    .await?;
                json!(distribution(labels))
            }

            ReportType::VehicleConsumption => {
                let samples = self
                    .trips
                    .consumption_samples(request.date_from, request.date_to)
                    .await?;
                let limit = request.limit.unwrap_or(DEFAULT_CONSUMPTION_LIMIT);
                json!(consumption_ranking(&samples, limit))
            }

            ReportType::TripVolume => {
                let rows = self
                    .trips
                    .daily_fuel_costs(request.date_from, request.date_to)
                    .await?;
                let series = daily_series(&rows);
                json!(series
                    .iter()
                    .map(|b| json!({ "day": b.day, "trips": b.count }))
                    .collect::<Vec<_>>())
            }

            ReportType::FuelCost => {
                let rows = self
                    .trips
                    .daily_fuel_costs(request.date_from, request.date_to)
                    .await?;
                let series = daily_series(&rows);
                json!(series
                    .iter()
                    .map(|b| json!({ "day": b.day, "total_cost": b.total }))
                    .collect::<Vec<_>>())
            }

            ReportType::SubcontractorFinancials => {
                let subcontractor_id = request.subcontractor_id.ok_or_else(|| {
                    AppError::BadRequest(
                        "subcontractor_id is required for this report".to_string(),
                    )
                })?;

                let (subcontractor, missions) = futures::try_join!(
                    self.subcontractors.find_by_id(subcontractor_id),
                    self.missions.find_by_subcontractor(subcontractor_id),
                )?;
                let subcontractor = subcontractor
                    .ok_or_else(|| AppError::NotFound("Subcontractor not found".to_string()))?;

                let in_range: Vec<_> = missions
                    .into_iter()
                    .filter(|m| {
                        m.mission_date >= request.date_from && m.mission_date <= request.date_to
                    })
                    .collect();

                json!({
                    "subcontractor_id": subcontractor.id,
                    "company_name": subcontractor.company_name,
                    "financials": financial_rollup(&in_range),
                })
            }
        };

        Ok(json!({
            "report_type": request.report_type,
            "date_from": request.date_from,
            "date_to": request.date_to,
            "data": data,
        }))
    }
}
