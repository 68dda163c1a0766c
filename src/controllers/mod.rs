//! Controladores de la API
//!
//! Un controlador por entidad entre rutas y repositorios: validación,
//! reglas de negocio y mapeo a DTOs.

pub mod driver_controller;
pub mod location_controller;
pub mod mission_controller;
pub mod report_controller;
pub mod subcontractor_controller;
pub mod sync_controller;
pub mod trip_controller;
pub mod vehicle_controller;
