//! HTTP request handlers for the café finder
//!
//! Implements the `/cafe` lookup and the `/health` check.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::CafeError;
use crate::core::query::CafeQuery;
use crate::core::services::Services;
use crate::core::types::HealthResponse;

/// Health check handler
///
/// Returns server status, version and the number of catalog cities.
pub async fn health_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cities: services.catalog.len(),
    })
}

/// Café list handler
///
/// Reads `city`, `count` and `search` from the query string and
/// returns the matching café names joined by commas.
///
/// # Errors
///
/// - `UnknownCity`: `city` missing or not in the catalog (400)
/// - `InvalidCount`: `count` present but not a non-negative integer (400)
pub async fn cafe_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, CafeError> {
    let query = CafeQuery::from_pairs(pairs);
    let body = services.search.list(&query)?;

    tracing::debug!(
        city = ?query.city,
        count = ?query.count,
        search = ?query.search,
        bytes = body.len(),
        "Cafe list rendered"
    );

    Ok(body)
}
