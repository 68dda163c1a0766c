//! Modelo de filtros y paginación
//!
//! Normaliza criterios de filtro y página/tamaño en un descriptor de
//! consulta determinista, y expone el estado de vista de los listados.

pub mod list_view;
pub mod pagination;

pub use list_view::{ListView, PageFetcher};
pub use pagination::{total_pages, PageRequest, Paginated};
