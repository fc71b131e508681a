//! Integration tests for the café finder HTTP API
//!
//! Covers the error responses, the success path, and the health
//! endpoint through the full router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use cafe_finder::core::catalog::{Cafe, Catalog};
use cafe_finder::core::types::HealthResponse;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{create_test_app, create_test_app_with, get, split_names};

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
    assert_eq!(health.cities, 2);
}

#[tokio::test]
async fn test_negative_requests() {
    let app = create_test_app();

    let cases = [
        ("/cafe", StatusCode::BAD_REQUEST, "unknown city"),
        ("/cafe?city=omsk", StatusCode::BAD_REQUEST, "unknown city"),
        ("/cafe?city=", StatusCode::BAD_REQUEST, "unknown city"),
        ("/cafe?city=Moscow", StatusCode::BAD_REQUEST, "unknown city"),
        (
            "/cafe?city=tula&count=na",
            StatusCode::BAD_REQUEST,
            "incorrect count",
        ),
        (
            "/cafe?city=tula&count=-1",
            StatusCode::BAD_REQUEST,
            "incorrect count",
        ),
        (
            "/cafe?city=omsk&count=na",
            StatusCode::BAD_REQUEST,
            "unknown city",
        ),
    ];

    for (uri, want_status, want_body) in cases {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, want_status, "uri={uri}");
        assert_eq!(body.trim(), want_body, "uri={uri}");
    }
}

#[tokio::test]
async fn test_ok_requests() {
    let app = create_test_app();

    let uris = [
        "/cafe?count=2&city=moscow".to_string(),
        "/cafe?city=tula".to_string(),
        format!("/cafe?city=moscow&search={}", urlencoding::encode("ложка")),
    ];

    for uri in &uris {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "uri={uri}");
    }
}

#[tokio::test]
async fn test_tula_lists_every_cafe_in_order() {
    let app = create_test_app();
    let catalog = Catalog::builtin();

    let (status, body) = get(&app, "/cafe?city=tula").await;
    assert_eq!(status, StatusCode::OK);

    let expected: Vec<&str> = catalog
        .cafes("tula")
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(split_names(&body), expected);
}

#[tokio::test]
async fn test_spoon_search() {
    let app = create_test_app();

    let uri = format!("/cafe?city=moscow&search={}", urlencoding::encode("ложка"));
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Ложка и вилка");
}

#[tokio::test]
async fn test_plain_text_content_type() {
    let app = create_test_app();

    for uri in ["/cafe?city=tula", "/cafe?city=omsk"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"), "uri={uri}");
    }
}

#[tokio::test]
async fn test_repeated_parameter_uses_first_value() {
    let app = create_test_app();

    let (status, body) = get(&app, "/cafe?city=tula&city=omsk&count=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Кофе с собой");
}

#[tokio::test]
async fn test_empty_count_is_unbounded() {
    let app = create_test_app();

    let (_, all) = get(&app, "/cafe?city=moscow").await;
    let (status, body) = get(&app, "/cafe?city=moscow&count=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, all);
}

#[tokio::test]
async fn test_identical_requests_identical_bodies() {
    let app = create_test_app();

    let uri = format!("/cafe?city=moscow&search={}&count=1", urlencoding::encode("Кофе"));
    let (_, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;

    assert_eq!(first, second);
    assert_eq!(first, "Мир кофе");
}

#[tokio::test]
async fn test_city_without_cafes() {
    let catalog = Catalog::from_cities(vec![
        ("omsk", Vec::new()),
        ("tomsk", vec![Cafe::new("Пельмени", "пр. Ленина, 1", "+7 3822 00-00-01")]),
    ])
    .unwrap();
    let app = create_test_app_with(catalog);

    let (status, body) = get(&app, "/cafe?city=omsk&count=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");

    let (status, body) = get(&app, "/cafe?city=tula").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "unknown city");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let (status, _) = get(&app, "/cafes?city=tula").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
