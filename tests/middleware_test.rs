mod common;

use axum::{
    http::{header, StatusCode},
    routing::get as route_get,
    Router,
};
use common::{get, send_with_body, TestResponse};
use shop_api::adapters::seed::sample_products;
use shop_api::server::{with_middleware, HttpLimits};
use shop_api::{build_router, AppState, CatalogService, InMemoryProductRepository};
use std::sync::Arc;
use std::time::Duration;

fn app_with_limits(limits: HttpLimits) -> Router {
    let repo = InMemoryProductRepository::new(sample_products()).unwrap();
    build_router(AppState::new(CatalogService::new(Arc::new(repo))).with_limits(limits))
}

async fn panicking_handler() -> &'static str {
    panic!("handler blew up")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_millis(500)).await;
    "done"
}

fn assert_json_error(response: &TestResponse, status: StatusCode, kind: &str) {
    assert_eq!(response.status, status);
    assert!(response.headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(response.body["error"], kind);
    assert_eq!(response.body["status"], status.as_u16());
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_oversized_body_returns_json_413() {
    let app = app_with_limits(HttpLimits {
        body_limit_bytes: 16,
        ..HttpLimits::default()
    });

    let response = send_with_body(app, "GET", "/api/products", vec![b'x'; 100]).await;

    assert_json_error(&response, StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large");
}

#[tokio::test]
async fn test_body_within_limit_is_accepted() {
    let app = app_with_limits(HttpLimits {
        body_limit_bytes: 16,
        ..HttpLimits::default()
    });

    let response = send_with_body(app, "GET", "/api/products", b"{}".to_vec()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
}

#[tokio::test]
async fn test_handler_panic_returns_json_500() {
    let router = Router::new().route("/boom", route_get(panicking_handler));
    let app = with_middleware(router, HttpLimits::default());

    let response = get(app, "/boom").await;

    assert_json_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "internal");
    assert_eq!(response.body["message"], "internal server error");
}

#[tokio::test]
async fn test_slow_handler_returns_json_408() {
    let router = Router::new().route("/slow", route_get(slow_handler));
    let app = with_middleware(
        router,
        HttpLimits {
            request_timeout: Duration::from_millis(10),
            ..HttpLimits::default()
        },
    );

    let response = get(app, "/slow").await;

    assert_json_error(&response, StatusCode::REQUEST_TIMEOUT, "request_timeout");
}

#[tokio::test]
async fn test_handler_errors_pass_through_unchanged() {
    let app = app_with_limits(HttpLimits::default());

    let response = get(app, "/api/products/999").await;

    assert_json_error(&response, StatusCode::NOT_FOUND, "not_found");
}
