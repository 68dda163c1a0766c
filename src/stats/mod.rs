//! Motor de agregación
//!
//! Funciones puras sobre colecciones en memoria: sin efectos, sin I/O.
//! Los repositorios traen las filas; aquí solo se calcula.

pub mod consumption;
pub mod distribution;
pub mod financial;
pub mod payment;
pub mod time_series;

pub use consumption::{consumption_ranking, VehicleConsumption, VehicleTripSample};
pub use distribution::{distribution, DistributionBucket};
pub use financial::{financial_rollup, SubcontractorFinancials};
pub use payment::{payment_status, PaymentStatus};
pub use time_series::{daily_series, zero_fill, DailyBucket};
