use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PaginatedResponse};
use crate::dto::trip_dto::{
    CreateTripRequest, TripContainerResponse, TripDetailResponse, TripListParams, TripResponse,
    UpdateContainerStatusRequest, UpdateTripRequest,
};
use crate::repositories::location_repository::LocationRepository;
use crate::repositories::trip_repository::{NewTrip, NewTripContainer, TripChanges, TripRepository};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_non_negative;

pub struct TripController {
    repository: TripRepository,
    locations: LocationRepository,
}

/// Litros por cada 100 km; NULL cuando no hay distancia recorrida
fn consumption_per_100km(distance_km: Decimal, fuel_actual_liters: Decimal) -> Option<Decimal> {
    if distance_km.is_zero() {
        return None;
    }
    Some((fuel_actual_liters / distance_km * Decimal::from(100)).round_dp(2))
}

fn check_non_negative(label: &str, value: Decimal) -> AppResult<()> {
    validate_non_negative(value)
        .map_err(|_| AppError::BadRequest(format!("{} cannot be negative", label)))
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> AppResult<ApiResponse<TripResponse>> {
        request.validate()?;

        if request.origin_id == request.destination_id {
            return Err(AppError::BadRequest(
                "Origin and destination must differ".to_string(),
            ));
        }
        self.check_locations(request.origin_id, request.destination_id).await?;

        check_non_negative("Distance", request.distance_km)?;
        let fuel_planned = request.fuel_planned_liters.unwrap_or(Decimal::ZERO);
        let fuel_actual = request.fuel_actual_liters.unwrap_or(Decimal::ZERO);
        let fuel_price = request.fuel_price.unwrap_or(Decimal::ZERO);
        check_non_negative("Planned fuel", fuel_planned)?;
        check_non_negative("Actual fuel", fuel_actual)?;
        check_non_negative("Fuel price", fuel_price)?;

        if self.repository.trip_number_exists(&request.trip_number).await? {
            return Err(AppError::Conflict(
                "A trip with this number already exists".to_string(),
            ));
        }

        let trip = self
            .repository
            .create(NewTrip {
                trip_number: request.trip_number,
                trip_date: request.trip_date,
                origin_id: request.origin_id,
                destination_id: request.destination_id,
                driver_id: request.driver_id,
                vehicle_id: request.vehicle_id,
                distance_km: request.distance_km,
                fuel_planned_liters: fuel_planned,
                fuel_actual_liters: fuel_actual,
                fuel_price,
                consumption_per_100km: consumption_per_100km(request.distance_km, fuel_actual),
                toll_costs: request.toll_costs.unwrap_or(Decimal::ZERO),
                other_costs: request.other_costs.unwrap_or(Decimal::ZERO),
                containers: request
                    .containers
                    .into_iter()
                    .map(|c| NewTripContainer {
                        container_type: c.container_type,
                        quantity: c.quantity,
                    })
                    .collect(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Trip created successfully".to_string(),
        ))
    }

    pub async fn list(&self, params: TripListParams) -> AppResult<PaginatedResponse<TripResponse>> {
        let page = self.repository.fetch_page(&params.filters(), params.page()).await?;
        Ok(PaginatedResponse::from_page(page, TripResponse::from))
    }

    pub async fn get_detail(&self, id: Uuid) -> AppResult<TripDetailResponse> {
        let (trip, containers) = futures::try_join!(
            self.repository.find_by_id(id),
            self.repository.containers_for_trip(id),
        )?;
        let trip = trip.ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        Ok(TripDetailResponse {
            trip: TripResponse::from(trip),
            containers: containers.into_iter().map(TripContainerResponse::from).collect(),
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let origin_id = request.origin_id.unwrap_or(current.origin_id);
        let destination_id = request.destination_id.unwrap_or(current.destination_id);
        if origin_id == destination_id {
            return Err(AppError::BadRequest(
                "Origin and destination must differ".to_string(),
            ));
        }
        if request.origin_id.is_some() || request.destination_id.is_some() {
            self.check_locations(origin_id, destination_id).await?;
        }

        let distance_km = request.distance_km.unwrap_or(current.distance_km);
        let fuel_actual = request.fuel_actual_liters.unwrap_or(current.fuel_actual_liters);
        check_non_negative("Distance", distance_km)?;
        check_non_negative("Actual fuel", fuel_actual)?;
        if let Some(fuel_planned) = request.fuel_planned_liters {
            check_non_negative("Planned fuel", fuel_planned)?;
        }
        if let Some(fuel_price) = request.fuel_price {
            check_non_negative("Fuel price", fuel_price)?;
        }

        let trip = self
            .repository
            .update(
                id,
                TripChanges {
                    trip_date: request.trip_date,
                    origin_id: request.origin_id,
                    destination_id: request.destination_id,
                    driver_id: request.driver_id,
                    vehicle_id: request.vehicle_id,
                    distance_km: request.distance_km,
                    fuel_planned_liters: request.fuel_planned_liters,
                    fuel_actual_liters: request.fuel_actual_liters,
                    fuel_price: request.fuel_price,
                    consumption_per_100km: consumption_per_100km(distance_km, fuel_actual),
                    toll_costs: request.toll_costs,
                    other_costs: request.other_costs,
                    status: request.status,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Trip updated successfully".to_string(),
        ))
    }

    pub async fn update_container_status(
        &self,
        container_id: Uuid,
        request: UpdateContainerStatusRequest,
    ) -> AppResult<TripContainerResponse> {
        let container = self
            .repository
            .update_container_status(container_id, request.delivery_status)
            .await?;

        Ok(TripContainerResponse::from(container))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }

    async fn check_locations(&self, origin_id: Uuid, destination_id: Uuid) -> AppResult<()> {
        let (origin, destination) = futures::try_join!(
            self.locations.find_by_id(origin_id),
            self.locations.find_by_id(destination_id),
        )?;
        if origin.is_none() {
            return Err(AppError::BadRequest("Origin location does not exist".to_string()));
        }
        if destination.is_none() {
            return Err(AppError::BadRequest(
                "Destination location does not exist".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_per_100km() {
        let consumption = consumption_per_100km(Decimal::from(400), Decimal::from(120)).unwrap();
        assert_eq!(consumption, Decimal::from(30));
    }

    #[test]
    fn test_consumption_rounds_to_two_decimals() {
        let consumption = consumption_per_100km(Decimal::from(300), Decimal::from(100)).unwrap();
        assert_eq!(consumption.to_string(), "33.33");
    }

    #[test]
    fn test_consumption_undefined_without_distance() {
        assert!(consumption_per_100km(Decimal::ZERO, Decimal::from(50)).is_none());
    }
}
