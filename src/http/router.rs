//! Route table for the HTTP adapter.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::handlers::{cafe_handler, health_handler};
use crate::http::middleware::log_request;

/// Build the application router over shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/cafe", get(cafe_handler))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
