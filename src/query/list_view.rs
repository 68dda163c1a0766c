//! Estado de vista de los listados
//!
//! `ListView` mantiene el estado de un listado paginado y filtrado:
//! colección actual, página, recuentos, flag de carga y último error.
//! El acceso a datos se inyecta como capability (`PageFetcher`), nunca
//! como cliente global. Un contador de generación descarta de forma
//! determinista las respuestas de fetches superados: si un refresh se
//! dispara antes de que el anterior resuelva, solo la generación más
//! reciente puede escribir el estado.
//!
//! Todas las operaciones son totales: los errores de transporte quedan
//! en `last_error` y vacían la colección, nunca escapan como panic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::query::pagination::{PageRequest, Paginated};
use crate::utils::errors::AppResult;

/// Capability de acceso a datos paginados, implementada por los
/// repositorios y por fakes en tests.
#[async_trait]
pub trait PageFetcher<F, R>: Send + Sync {
    async fn fetch_page(&self, filters: &F, page: PageRequest) -> AppResult<Paginated<R>>;
}

/// Estado observable de un listado
#[derive(Debug, Clone)]
pub struct ListState<F, R> {
    pub filters: F,
    pub page: i64,
    pub page_size: i64,
    pub count: i64,
    pub total_pages: i64,
    pub rows: Vec<R>,
    pub loading: bool,
    pub last_error: Option<String>,
}

pub struct ListView<F, R> {
    fetcher: Arc<dyn PageFetcher<F, R>>,
    state: RwLock<ListState<F, R>>,
    generation: AtomicU64,
}

impl<F, R> ListView<F, R>
where
    F: Clone + Default + Send + Sync,
    R: Clone + Send + Sync,
{
    pub fn new(fetcher: Arc<dyn PageFetcher<F, R>>, page_size: i64) -> Self {
        Self {
            fetcher,
            state: RwLock::new(ListState {
                filters: F::default(),
                page: 1,
                page_size: page_size.max(1),
                count: 0,
                total_pages: 0,
                rows: Vec::new(),
                loading: false,
                last_error: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Copia del estado actual
    pub async fn snapshot(&self) -> ListState<F, R> {
        self.state.read().await.clone()
    }

    /// Vuelve a ejecutar el fetch con los filtros y página actuales
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (filters, page) = {
            let mut state = self.state.write().await;
            state.loading = true;
            (
                state.filters.clone(),
                PageRequest::new(state.page, state.page_size),
            )
        };

        // El lock no se retiene durante el fetch; otro refresh puede
        // adelantar la generación mientras este espera.
        let result = self.fetcher.fetch_page(&filters, page).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            // Respuesta de un fetch superado
            return;
        }
        state.loading = false;
        match result {
            Ok(paginated) => {
                state.rows = paginated.rows;
                state.count = paginated.count;
                state.total_pages = paginated.total_pages;
                state.last_error = None;
            }
            Err(e) => {
                state.rows = Vec::new();
                state.count = 0;
                state.total_pages = 0;
                state.last_error = Some(e.to_string());
            }
        }
    }

    /// Aplica un cambio parcial de filtros; la página vuelve siempre a 1
    pub async fn update_filters(&self, apply: impl FnOnce(&mut F)) {
        {
            let mut state = self.state.write().await;
            apply(&mut state.filters);
            state.page = 1;
        }
        self.refresh().await;
    }

    /// Restablece los filtros por defecto y vuelve a la página 1
    pub async fn clear_filters(&self) {
        {
            let mut state = self.state.write().await;
            state.filters = F::default();
            state.page = 1;
        }
        self.refresh().await;
    }

    /// No-op salvo que `1 <= n <= total_pages`
    pub async fn go_to_page(&self, n: i64) {
        {
            let mut state = self.state.write().await;
            if n < 1 || n > state.total_pages {
                return;
            }
            state.page = n;
        }
        self.refresh().await;
    }

    /// No-op en la última página (y con cero páginas)
    pub async fn next_page(&self) {
        {
            let mut state = self.state.write().await;
            if state.page >= state.total_pages {
                return;
            }
            state.page += 1;
        }
        self.refresh().await;
    }

    /// No-op en la primera página
    pub async fn previous_page(&self) {
        {
            let mut state = self.state.write().await;
            if state.page <= 1 {
                return;
            }
            state.page -= 1;
        }
        self.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[derive(Debug, Clone, Default)]
    struct FakeFilters {
        min: Option<i32>,
    }

    /// Fetcher en memoria sobre un Vec, con la misma semántica de
    /// ventana que la capa de consultas real.
    struct FakeFetcher {
        data: Vec<i32>,
    }

    #[async_trait]
    impl PageFetcher<FakeFilters, i32> for FakeFetcher {
        async fn fetch_page(
            &self,
            filters: &FakeFilters,
            page: PageRequest,
        ) -> AppResult<Paginated<i32>> {
            let matching: Vec<i32> = self
                .data
                .iter()
                .copied()
                .filter(|v| filters.min.map_or(true, |min| *v >= min))
                .collect();
            let count = matching.len() as i64;
            let rows = matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect();
            Ok(Paginated::new(rows, count, page))
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher<FakeFilters, i32> for FailingFetcher {
        async fn fetch_page(
            &self,
            _filters: &FakeFilters,
            _page: PageRequest,
        ) -> AppResult<Paginated<i32>> {
            Err(AppError::Database("connection refused".to_string()))
        }
    }

    /// Devuelve una página distinta por llamada, con retardo programado,
    /// para provocar terminaciones fuera de orden.
    struct SlowFirstFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher<FakeFilters, i32> for SlowFirstFetcher {
        async fn fetch_page(
            &self,
            _filters: &FakeFilters,
            page: PageRequest,
        ) -> AppResult<Paginated<i32>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok(Paginated::new(vec![1], 1, page))
            } else {
                Ok(Paginated::new(vec![2], 1, page))
            }
        }
    }

    fn view_of(data: Vec<i32>, page_size: i64) -> ListView<FakeFilters, i32> {
        ListView::new(Arc::new(FakeFetcher { data }), page_size)
    }

    #[tokio::test]
    async fn test_pagination_walk_45_rows() {
        let view = view_of((0..45).collect(), 20);
        view.refresh().await;

        let state = view.snapshot().await;
        assert_eq!(state.rows.len(), 20);
        assert_eq!(state.count, 45);
        assert_eq!(state.total_pages, 3);

        view.next_page().await;
        view.next_page().await;
        let state = view.snapshot().await;
        assert_eq!(state.page, 3);
        assert_eq!(state.rows.len(), 5);

        // En la última página next_page no hace nada
        view.next_page().await;
        let state = view.snapshot().await;
        assert_eq!(state.page, 3);
        assert_eq!(state.rows.len(), 5);
    }

    #[tokio::test]
    async fn test_update_filters_resets_page() {
        let view = view_of((0..45).collect(), 20);
        view.refresh().await;
        view.go_to_page(2).await;
        assert_eq!(view.snapshot().await.page, 2);

        view.update_filters(|f| f.min = Some(40)).await;
        let state = view.snapshot().await;
        assert_eq!(state.page, 1);
        assert_eq!(state.count, 5);
        assert_eq!(state.total_pages, 1);
    }

    #[tokio::test]
    async fn test_narrower_filters_never_grow_count() {
        let view = view_of((0..45).collect(), 20);
        view.refresh().await;
        let unfiltered = view.snapshot().await.count;

        view.update_filters(|f| f.min = Some(10)).await;
        let filtered = view.snapshot().await.count;
        assert!(filtered <= unfiltered);
    }

    #[tokio::test]
    async fn test_go_to_page_out_of_range_is_noop() {
        let view = view_of((0..45).collect(), 20);
        view.refresh().await;

        view.go_to_page(0).await;
        assert_eq!(view.snapshot().await.page, 1);

        view.go_to_page(99).await;
        assert_eq!(view.snapshot().await.page, 1);

        view.go_to_page(3).await;
        assert_eq!(view.snapshot().await.page, 3);
    }

    #[tokio::test]
    async fn test_empty_collection_has_zero_pages() {
        let view = view_of(Vec::new(), 20);
        view.refresh().await;

        let state = view.snapshot().await;
        assert_eq!(state.count, 0);
        assert_eq!(state.total_pages, 0);

        view.next_page().await;
        view.previous_page().await;
        assert_eq!(view.snapshot().await.page, 1);
    }

    #[tokio::test]
    async fn test_fetch_error_lands_in_state() {
        let view: ListView<FakeFilters, i32> = ListView::new(Arc::new(FailingFetcher), 20);
        view.refresh().await;

        let state = view.snapshot().await;
        assert!(state.rows.is_empty());
        assert_eq!(state.count, 0);
        assert!(state.last_error.as_deref().unwrap().contains("connection refused"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let view: Arc<ListView<FakeFilters, i32>> = Arc::new(ListView::new(
            Arc::new(SlowFirstFetcher {
                calls: AtomicUsize::new(0),
            }),
            20,
        ));

        // Primer refresh lento, segundo rápido: el resultado del primero
        // llega el último pero su generación ya está superada.
        let slow = tokio::spawn({
            let view = Arc::clone(&view);
            async move { view.refresh().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        view.refresh().await;
        slow.await.unwrap();

        let state = view.snapshot().await;
        assert_eq!(state.rows, vec![2]);
    }
}
