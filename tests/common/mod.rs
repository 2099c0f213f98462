#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shop_api::adapters::seed::sample_products;
use shop_api::{build_router, AppState, CatalogService, InMemoryProductRepository};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn sample_app() -> Router {
    let repo = InMemoryProductRepository::new(sample_products()).unwrap();
    build_router(AppState::new(CatalogService::new(Arc::new(repo))))
}

pub fn empty_app() -> Router {
    build_router(AppState::new(CatalogService::new(Arc::new(
        InMemoryProductRepository::empty(),
    ))))
}

pub async fn send(app: Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_request(app, request).await
}

pub async fn send_with_body(app: Router, method: &str, uri: &str, body: Vec<u8>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    send_request(app, request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, "GET", uri).await
}

pub fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}
