//! Page selection shared by every paginated endpoint.

use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 6;
pub const MAX_PAGE_SIZE: u64 = 100;

/// `?page=&limit=` query parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-indexed page number (default 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default 6, max 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn into_page(self) -> Page {
        Page::new(self.page, self.limit)
    }
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-indexed page number.
    pub page: u64,
    /// Items per page, within `1..=MAX_PAGE_SIZE`.
    pub per_page: u64,
}

impl Page {
    /// Clamps `limit` into `1..=MAX_PAGE_SIZE` and `page` so that the row offset
    /// `page * per_page` stays within SQLite's signed 64-bit range.
    pub fn new(page: u64, limit: u64) -> Self {
        let per_page = limit.clamp(1, MAX_PAGE_SIZE);

        Self {
            page: page.min(i64::MAX as u64 / per_page),
            per_page,
        }
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}
