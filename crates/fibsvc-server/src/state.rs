//! Application state shared across HTTP handlers.

use fibsvc_core::{FibService, DEFAULT_MAX_INDEX, DEFAULT_MAX_PAGE_SIZE};

use crate::error::ApiError;

/// Transport-level request bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest index or listing total accepted.
    pub max_index: u64,
    /// Largest page size accepted.
    pub max_page_size: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_index: DEFAULT_MAX_INDEX,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl Limits {
    /// Reject a positive index above `max_index`. Non-positive indices are
    /// left for the core to report.
    pub fn check_index(&self, index: i64) -> Result<(), ApiError> {
        check("index", index, self.max_index)
    }

    /// Bounds for a listing. Only applied once every parameter is positive,
    /// so the core still reports validation errors in its own order.
    pub fn check_listing(&self, n: i64, page: i64, page_size: i64) -> Result<(), ApiError> {
        if n <= 0 || page <= 0 || page_size <= 0 {
            return Ok(());
        }
        check("page_size", page_size, self.max_page_size)?;
        check("n", n, self.max_index)
    }
}

fn check(what: &'static str, value: i64, max: u64) -> Result<(), ApiError> {
    match u64::try_from(value) {
        Ok(value) if value > max => {
            tracing::warn!(what, value, max, "Request exceeds configured limit");
            Err(ApiError::LimitExceeded { what, value, max })
        }
        _ => Ok(()),
    }
}

/// State handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: FibService,
    pub limits: Limits,
}

impl AppState {
    #[must_use]
    pub fn new(service: FibService, limits: Limits) -> Self {
        Self { service, limits }
    }
}
