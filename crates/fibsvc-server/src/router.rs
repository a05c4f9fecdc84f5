//! Router setup.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fibonacci", get(handlers::list_fibonacci))
        .route("/fibonacci/{index}", get(handlers::get_fibonacci))
        .route(
            "/blacklist",
            post(handlers::add_to_blacklist).delete(handlers::remove_from_blacklist),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
