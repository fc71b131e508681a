// Common test utilities

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cafe_finder::core::catalog::Catalog;
use cafe_finder::core::config::Config;
use cafe_finder::core::services::Services;
use cafe_finder::http;
use tower::ServiceExt as TowerServiceExt;

/// Create a test application over the built-in catalog
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    create_test_app_with(Catalog::builtin())
}

/// Create a test application over a custom catalog
#[allow(dead_code)]
pub fn create_test_app_with(catalog: Catalog) -> Router {
    let services = Arc::new(Services::new(Config::default(), catalog));
    http::router(services)
}

/// Issue a GET request and return status and body text
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Split a response body into café names
#[allow(dead_code)]
pub fn split_names(body: &str) -> Vec<&str> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').collect()
    }
}
