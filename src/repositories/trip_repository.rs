use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::trip::{ContainerDeliveryStatus, Trip, TripContainer, TripFilters, TripStatus};
use crate::query::{PageFetcher, PageRequest, Paginated};
use crate::stats::VehicleTripSample;
use crate::utils::errors::{AppError, AppResult};

/// Datos de alta de un trip; el consumo lo calcula el caller
pub struct NewTrip {
    pub trip_number: String,
    pub trip_date: NaiveDate,
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub distance_km: Decimal,
    pub fuel_planned_liters: Decimal,
    pub fuel_actual_liters: Decimal,
    pub fuel_price: Decimal,
    pub consumption_per_100km: Option<Decimal>,
    pub toll_costs: Decimal,
    pub other_costs: Decimal,
    pub containers: Vec<NewTripContainer>,
}

pub struct NewTripContainer {
    pub container_type: String,
    pub quantity: i32,
}

/// Cambios parciales de un trip. `consumption_per_100km` llega ya
/// recalculado por el caller sobre los valores resueltos.
pub struct TripChanges {
    pub trip_date: Option<NaiveDate>,
    pub origin_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub distance_km: Option<Decimal>,
    pub fuel_planned_liters: Option<Decimal>,
    pub fuel_actual_liters: Option<Decimal>,
    pub fuel_price: Option<Decimal>,
    pub consumption_per_100km: Option<Decimal>,
    pub toll_costs: Option<Decimal>,
    pub other_costs: Option<Decimal>,
    pub status: Option<TripStatus>,
}

pub struct TripRepository {
    pool: PgPool,
}

fn push_filters(query: &mut QueryBuilder<Postgres>, filters: &TripFilters) {
    if let Some(q) = &filters.q {
        query
            .push(" AND trip_number ILIKE ")
            .push_bind(format!("%{}%", q));
    }
    if let Some(status) = filters.status {
        query.push(" AND status = ").push_bind(status);
    }
    if let Some(driver_id) = filters.driver_id {
        query.push(" AND driver_id = ").push_bind(driver_id);
    }
    if let Some(vehicle_id) = filters.vehicle_id {
        query.push(" AND vehicle_id = ").push_bind(vehicle_id);
    }
    if let Some(date_from) = filters.date_from {
        query.push(" AND trip_date >= ").push_bind(date_from);
    }
    if let Some(date_to) = filters.date_to {
        query.push(" AND trip_date <= ").push_bind(date_to);
    }
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_page(
        &self,
        filters: &TripFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Trip>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM trips WHERE 1=1");
        push_filters(&mut count_query, filters);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting trips: {}", e)))?;

        let mut data_query = QueryBuilder::new("SELECT * FROM trips WHERE 1=1");
        push_filters(&mut data_query, filters);
        data_query
            .push(" ORDER BY trip_date DESC, created_at DESC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let trips = data_query
            .build_query_as::<Trip>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing trips: {}", e)))?;

        Ok(Paginated::new(trips, count, page))
    }

    /// Inserta el trip y sus contenedores en una única transacción
    pub async fn create(&self, new_trip: NewTrip) -> AppResult<Trip> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, trip_number, trip_date, origin_id, destination_id, driver_id, vehicle_id,
                distance_km, fuel_planned_liters, fuel_actual_liters, fuel_price,
                consumption_per_100km, toll_costs, other_costs, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 'planned', $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_trip.trip_number)
        .bind(new_trip.trip_date)
        .bind(new_trip.origin_id)
        .bind(new_trip.destination_id)
        .bind(new_trip.driver_id)
        .bind(new_trip.vehicle_id)
        .bind(new_trip.distance_km)
        .bind(new_trip.fuel_planned_liters)
        .bind(new_trip.fuel_actual_liters)
        .bind(new_trip.fuel_price)
        .bind(new_trip.consumption_per_100km)
        .bind(new_trip.toll_costs)
        .bind(new_trip.other_costs)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error creating trip: {}", e)))?;

        for container in new_trip.containers {
            sqlx::query(
                r#"
                INSERT INTO trip_containers (id, trip_id, container_type, quantity, delivery_status)
                VALUES ($1, $2, $3, $4, 'pending')
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(trip.id)
            .bind(container.container_type)
            .bind(container.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error creating trip container: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing trip: {}", e)))?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trip>> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding trip: {}", e)))?;

        Ok(trip)
    }

    pub async fn trip_number_exists(&self, trip_number: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trips WHERE trip_number = $1)")
                .bind(trip_number)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking trip number: {}", e)))?;

        Ok(result.0)
    }

    pub async fn containers_for_trip(&self, trip_id: Uuid) -> AppResult<Vec<TripContainer>> {
        let containers = sqlx::query_as::<_, TripContainer>(
            "SELECT * FROM trip_containers WHERE trip_id = $1 ORDER BY container_type",
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing trip containers: {}", e)))?;

        Ok(containers)
    }

    pub async fn update_container_status(
        &self,
        container_id: Uuid,
        delivery_status: ContainerDeliveryStatus,
    ) -> AppResult<TripContainer> {
        let container = sqlx::query_as::<_, TripContainer>(
            "UPDATE trip_containers SET delivery_status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(container_id)
        .bind(delivery_status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating container: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Trip container not found".to_string()))?;

        Ok(container)
    }

    pub async fn update(&self, id: Uuid, changes: TripChanges) -> AppResult<Trip> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET trip_date = $2, origin_id = $3, destination_id = $4, driver_id = $5,
                vehicle_id = $6, distance_km = $7, fuel_planned_liters = $8,
                fuel_actual_liters = $9, fuel_price = $10, consumption_per_100km = $11,
                toll_costs = $12, other_costs = $13, status = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.trip_date.unwrap_or(current.trip_date))
        .bind(changes.origin_id.unwrap_or(current.origin_id))
        .bind(changes.destination_id.unwrap_or(current.destination_id))
        .bind(changes.driver_id.unwrap_or(current.driver_id))
        .bind(changes.vehicle_id.unwrap_or(current.vehicle_id))
        .bind(changes.distance_km.unwrap_or(current.distance_km))
        .bind(changes.fuel_planned_liters.unwrap_or(current.fuel_planned_liters))
        .bind(changes.fuel_actual_liters.unwrap_or(current.fuel_actual_liters))
        .bind(changes.fuel_price.unwrap_or(current.fuel_price))
        .bind(changes.consumption_per_100km)
        .bind(changes.toll_costs.unwrap_or(current.toll_costs))
        .bind(changes.other_costs.unwrap_or(current.other_costs))
        .bind(changes.status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating trip: {}", e)))?;

        Ok(trip)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting trip: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }
        Ok(())
    }

    /// Muestras por vehículo para el ranking de consumo
    pub async fn consumption_samples(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> AppResult<Vec<VehicleTripSample>> {
        let rows = sqlx::query_as::<_, (Uuid, String, Decimal, Decimal)>(
            r#"
            SELECT t.vehicle_id, v.plate_number, t.distance_km, t.fuel_actual_liters
            FROM trips t
            JOIN vehicles v ON v.id = t.vehicle_id
            WHERE t.trip_date >= $1 AND t.trip_date <= $2
            "#,
        )
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error loading consumption samples: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(vehicle_id, plate_number, distance_km, fuel_liters)| VehicleTripSample {
                vehicle_id,
                plate_number,
                distance_km,
                fuel_liters,
            })
            .collect())
    }

    /// Fecha y coste de combustible de cada trip del rango; el mismo
    /// conjunto alimenta la serie de volumen (recuento) y la de coste
    pub async fn daily_fuel_costs(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> AppResult<Vec<(NaiveDate, Decimal)>> {
        let rows = sqlx::query_as::<_, (NaiveDate, Decimal)>(
            r#"
            SELECT trip_date, fuel_actual_liters * fuel_price
            FROM trips
            WHERE trip_date >= $1 AND trip_date <= $2
            "#,
        )
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error loading daily fuel costs: {}", e)))?;

        Ok(rows)
    }

    /// Etiquetas de tipo de contenedor del rango, una por fila de contenedor
    pub async fn container_labels(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> AppResult<Vec<String>> {
        let labels = sqlx::query_scalar::<_, String>(
            r#"
            SELECT tc.container_type
            FROM trip_containers tc
            JOIN trips t ON t.id = tc.trip_id
            WHERE t.trip_date >= $1 AND t.trip_date <= $2
            "#,
        )
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error loading container labels: {}", e)))?;

        Ok(labels)
    }
}

#[async_trait]
impl PageFetcher<TripFilters, Trip> for TripRepository {
    async fn fetch_page(
        &self,
        filters: &TripFilters,
        page: PageRequest,
    ) -> AppResult<Paginated<Trip>> {
        TripRepository::fetch_page(self, filters, page).await
    }
}
