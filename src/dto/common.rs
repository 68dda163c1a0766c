use serde::Serialize;

use crate::query::Paginated;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Lista paginada para la API
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page<R>(paginated: Paginated<R>, map: impl FnMut(R) -> T) -> Self {
        let paginated = paginated.map(map);
        Self {
            items: paginated.rows,
            total: paginated.count,
            page: paginated.page,
            per_page: paginated.page_size,
            total_pages: paginated.total_pages,
        }
    }
}
