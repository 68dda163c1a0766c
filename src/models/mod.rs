//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod driver;
pub mod location;
pub mod mission;
pub mod subcontractor;
pub mod sync;
pub mod trip;
pub mod vehicle;
