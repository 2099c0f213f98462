mod common;

use axum::http::StatusCode;
use common::{empty_app, get, sample_app};

#[tokio::test]
async fn test_product_listing_returns_200_and_array() {
    let response = get(sample_app(), "/api/products").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    assert_eq!(response.body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_non_existent_route_returns_404() {
    let response = get(sample_app(), "/api/non-existent").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "not_found");
    assert_eq!(response.body["status"], 404);
    assert_eq!(response.body["path"], "/api/non-existent");
}

#[tokio::test]
async fn test_any_unregistered_path_returns_404() {
    for path in ["/", "/api", "/api/product", "/api/products/1/reviews", "/static/app.js"] {
        let response = get(sample_app(), path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "path {}", path);
    }
}

#[tokio::test]
async fn test_requests_are_independent() {
    let app = sample_app();

    let (listing, missing) = tokio::join!(
        get(app.clone(), "/api/products"),
        get(app.clone(), "/api/non-existent")
    );
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    // 重複請求結果不變
    let again = get(app, "/api/products").await;
    assert_eq!(again.body, listing.body);
}

#[tokio::test]
async fn test_empty_catalog_still_returns_array() {
    let response = get(empty_app(), "/api/products").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
    assert_eq!(response.headers["x-total-count"], "0");
}

#[tokio::test]
async fn test_product_shape() {
    let response = get(sample_app(), "/api/products?limit=1").await;
    let product = &response.body[0];

    assert_eq!(product["id"], 1);
    assert_eq!(product["name"], "Wireless Mouse");
    assert_eq!(product["category"], "Electronics");
    assert!(product["price"].is_f64());
    assert!(product["stock"].is_u64());
    assert!(product["created_at"].as_str().unwrap().starts_with("2024-01-01T09:00:00"));
}

#[tokio::test]
async fn test_wrong_method_on_known_route() {
    let response = common::send(sample_app(), "POST", "/api/products").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_check() {
    let response = get(sample_app(), "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["service"], "shop-api");
    assert_eq!(response.body["products"], 8);
}
