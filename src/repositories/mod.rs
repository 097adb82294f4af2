//! Capa de persistencia
//!
//! Un repositorio por entidad, todos sobre `sqlx` con queries en runtime.
//! Las operaciones multi-statement (routes y limpieza de junction rows)
//! abren su propia transacción.

pub mod agent_repository;
pub mod company_repository;
pub mod point_repository;
pub mod route_repository;
pub mod user_repository;
pub mod vehicle_repository;

/// Paginación offset/limit compartida por todos los listados
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 50;

impl Pagination {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(0).max(0);
        let limit = limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);

        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        self.page * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::new(None, None);
        assert_eq!(pagination.page, 0);
        assert_eq!(pagination.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_pagination_limit_is_clamped() {
        assert_eq!(Pagination::new(None, Some(500)).limit, MAX_PAGE_LIMIT);
        assert_eq!(Pagination::new(None, Some(0)).limit, 1);
        assert_eq!(Pagination::new(Some(-3), None).page, 0);
    }

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination::new(Some(3), Some(10));
        assert_eq!(pagination.offset(), 30);
    }
}
