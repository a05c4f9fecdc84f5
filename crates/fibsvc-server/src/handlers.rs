//! Endpoint handlers.
//!
//! Resolution is CPU-bound and the file-backed blacklist does blocking I/O,
//! so both run on the blocking pool.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use fibsvc_core::FibError;

use crate::dto::{
    BlacklistRequest, BlacklistResponse, FibonacciListResponse, FibonacciResponse,
    HealthResponse, ListQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /fibonacci/{index}
pub async fn get_fibonacci(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<FibonacciResponse>, ApiError> {
    let Path(index) = path.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    if let Err(limit) = state.limits.check_index(index) {
        // A blacklisted index is reported as such even above the limit.
        let service = state.service.clone();
        run_blocking(move || service.ensure_allowed(index)).await?;
        return Err(limit);
    }

    let service = state.service.clone();
    let value = run_blocking(move || service.fibonacci(index)).await?;
    // A resolved index is positive.
    Ok(Json(FibonacciResponse::new(index.unsigned_abs(), &value)))
}

/// GET /fibonacci?n=&page=&page_size=
pub async fn list_fibonacci(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<FibonacciListResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    state
        .limits
        .check_listing(query.n, query.page, query.page_size)?;

    let service = state.service.clone();
    let body = run_blocking(move || {
        service
            .list(query.n, query.page, query.page_size)
            .map(FibonacciListResponse::from)
    })
    .await?;
    Ok(Json(body))
}

/// POST /blacklist
pub async fn add_to_blacklist(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BlacklistRequest>, JsonRejection>,
) -> Result<Json<BlacklistResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let service = state.service.clone();
    let number = run_blocking(move || service.blacklist_add(request.number)).await?;
    Ok(Json(BlacklistResponse::added(number)))
}

/// DELETE /blacklist
pub async fn remove_from_blacklist(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BlacklistRequest>, JsonRejection>,
) -> Result<Json<BlacklistResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let service = state.service.clone();
    let number = run_blocking(move || service.blacklist_remove(request.number)).await?;
    Ok(Json(BlacklistResponse::removed(number)))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.service.store_name().to_string(),
        cache: state.service.cache_stats(),
    })
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, FibError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("worker task failed: {e}")))?
        .map_err(ApiError::from)
}
