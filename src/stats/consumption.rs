//! Consumo de combustible por vehículo
//!
//! Litros por cada 100 km sobre las muestras aportadas: combustible
//! total entre distancia total, no media de ratios por trip, para que
//! los trayectos cortos no dominen el ranking. Vehículos sin distancia
//! acumulada quedan fuera.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Fila mínima que necesita el cálculo, tal como la trae el repositorio
#[derive(Debug, Clone)]
pub struct VehicleTripSample {
    pub vehicle_id: Uuid,
    pub plate_number: String,
    pub distance_km: Decimal,
    pub fuel_liters: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleConsumption {
    pub vehicle_id: Uuid,
    pub plate_number: String,
    pub trips: i64,
    pub total_distance_km: Decimal,
    pub total_fuel_liters: Decimal,
    pub liters_per_100km: f64,
}

/// Ranking descendente por consumo, truncado a `limit`
pub fn consumption_ranking(samples: &[VehicleTripSample], limit: usize) -> Vec<VehicleConsumption> {
    let mut by_vehicle: HashMap<Uuid, (String, i64, Decimal, Decimal)> = HashMap::new();
    for sample in samples {
        let entry = by_vehicle.entry(sample.vehicle_id).or_insert_with(|| {
            (sample.plate_number.clone(), 0, Decimal::ZERO, Decimal::ZERO)
        });
        entry.1 += 1;
        entry.2 += sample.distance_km;
        entry.3 += sample.fuel_liters;
    }

    let mut ranking: Vec<VehicleConsumption> = by_vehicle
        .into_iter()
        .filter(|(_, (_, _, distance, _))| !distance.is_zero())
        .map(|(vehicle_id, (plate_number, trips, distance, fuel))| {
            let per_100 = (fuel / distance * Decimal::from(100))
                .to_f64()
                .unwrap_or(0.0);
            VehicleConsumption {
                vehicle_id,
                plate_number,
                trips,
                total_distance_km: distance,
                total_fuel_liters: fuel,
                liters_per_100km: (per_100 * 100.0).round() / 100.0,
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.liters_per_100km
            .partial_cmp(&a.liters_per_100km)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.plate_number.cmp(&b.plate_number))
    });
    ranking.truncate(limit);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(vehicle_id: Uuid, plate: &str, distance: i64, fuel: i64) -> VehicleTripSample {
        VehicleTripSample {
            vehicle_id,
            plate_number: plate.to_string(),
            distance_km: Decimal::from(distance),
            fuel_liters: Decimal::from(fuel),
        }
    }

    #[test]
    fn test_ranking_orders_by_consumption_descending() {
        let sober = Uuid::new_v4();
        let thirsty = Uuid::new_v4();
        let samples = vec![
            // 30 l / 100 km
            sample(thirsty, "TH-123-IR", 200, 60),
            // 20 l / 100 km en dos trips
            sample(sober, "SO-456-BR", 300, 45),
            sample(sober, "SO-456-BR", 100, 35),
        ];

        let ranking = consumption_ranking(&samples, 10);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].plate_number, "TH-123-IR");
        assert_eq!(ranking[0].liters_per_100km, 30.0);
        assert_eq!(ranking[1].plate_number, "SO-456-BR");
        assert_eq!(ranking[1].liters_per_100km, 20.0);
        assert_eq!(ranking[1].trips, 2);
    }

    #[test]
    fn test_ranking_respects_limit() {
        let samples: Vec<VehicleTripSample> = (0..5)
            .map(|i| sample(Uuid::new_v4(), &format!("PL-00{}-XX", i), 100, 10 + i))
            .collect();
        let ranking = consumption_ranking(&samples, 3);
        assert_eq!(ranking.len(), 3);
    }

    #[test]
    fn test_zero_distance_vehicles_are_excluded() {
        let samples = vec![sample(Uuid::new_v4(), "ZE-000-RO", 0, 50)];
        assert!(consumption_ranking(&samples, 10).is_empty());
    }

    #[test]
    fn test_empty_samples_yield_empty_ranking() {
        assert!(consumption_ranking(&[], 10).is_empty());
    }
}
