//! Request and response bodies.
//!
//! Fibonacci values are sent as decimal strings; they outgrow every JSON
//! number type long before the index limit.

use num_bigint::BigUint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use fibsvc_core::{CacheStats, ResolvedPage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// A single `(index, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciResponse {
    pub number: u64,
    pub fibonacci: String,
}

impl FibonacciResponse {
    #[must_use]
    pub fn new(number: u64, value: &BigUint) -> Self {
        Self {
            number,
            fibonacci: value.to_string(),
        }
    }
}

/// Query string of `GET /fibonacci`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub n: i64,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Body of `GET /fibonacci`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciListResponse {
    pub page: u64,
    pub page_size: u64,
    pub numbers: Vec<FibonacciResponse>,
    pub total_pages: u64,
}

impl From<ResolvedPage> for FibonacciListResponse {
    fn from(page: ResolvedPage) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            // Decimal rendering of large values dominates; spread it out.
            numbers: page
                .numbers
                .par_iter()
                .map(|(number, value)| FibonacciResponse::new(*number, value))
                .collect(),
            total_pages: page.total_pages,
        }
    }
}

/// Body of `POST /blacklist` and `DELETE /blacklist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistRequest {
    pub number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistResponse {
    pub message: String,
}

impl BlacklistResponse {
    #[must_use]
    pub fn added(number: u64) -> Self {
        Self {
            message: format!("Number {number} has been blacklisted."),
        }
    }

    #[must_use]
    pub fn removed(number: u64) -> Self {
        Self {
            message: format!("Number {number} has been removed from the blacklist."),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: String,
    pub cache: CacheStats,
}

/// Error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub detail: String,
    /// Machine-readable code.
    pub code: String,
}
