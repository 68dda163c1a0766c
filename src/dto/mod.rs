//! DTOs de la API
//!
//! Requests, responses y parámetros de listado por entidad. Cada fila
//! de consulta se mapea a un struct de respuesta explícito.

pub mod common;
pub mod driver_dto;
pub mod mission_dto;
pub mod report_dto;
pub mod subcontractor_dto;
pub mod sync_dto;
pub mod trip_dto;
pub mod vehicle_dto;
