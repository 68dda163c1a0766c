//! Capa de traducción de consultas
//!
//! Un repositorio por entidad sobre un `PgPool` inyectado. Los filtros
//! se componen como predicados con `QueryBuilder`: búsqueda de texto
//! como ILIKE en OR sobre columnas fijas, filtros de enum como
//! igualdad, paginación como ventana LIMIT/OFFSET junto al COUNT
//! exacto bajo los mismos predicados.

pub mod driver_repository;
pub mod location_repository;
pub mod mission_repository;
pub mod subcontractor_repository;
pub mod sync_queue_repository;
pub mod trip_repository;
pub mod vehicle_repository;
