mod common;

use axum::http::StatusCode;
use common::{get, ids, sample_app};

#[tokio::test]
async fn test_filter_by_category() {
    let response = get(sample_app(), "/api/products?category=books").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![4, 5]);
    assert_eq!(response.headers["x-total-count"], "2");
}

#[tokio::test]
async fn test_search_and_sort() {
    let response = get(sample_app(), "/api/products?q=key&sort=price_desc").await;
    assert_eq!(ids(&response.body), vec![2]);

    let response = get(sample_app(), "/api/products?category=Kitchen&sort=price_asc").await;
    assert_eq!(ids(&response.body), vec![7, 6, 8]);
}

#[tokio::test]
async fn test_price_range_and_stock_filters() {
    let response = get(
        sample_app(),
        "/api/products?min_price=25&max_price=45&in_stock=true",
    )
    .await;
    assert_eq!(ids(&response.body), vec![4, 6]);

    let response = get(sample_app(), "/api/products?in_stock=false").await;
    assert_eq!(ids(&response.body), vec![3, 7]);
}

#[tokio::test]
async fn test_pagination_sets_total_count() {
    let response = get(sample_app(), "/api/products?limit=3&offset=3").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![4, 5, 6]);
    assert_eq!(response.headers["x-total-count"], "8");
}

#[tokio::test]
async fn test_no_matches_is_empty_array() {
    let response = get(sample_app(), "/api/products?category=Garden").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_query_returns_json_400() {
    for uri in [
        "/api/products?min_price=abc",
        "/api/products?in_stock=maybe",
        "/api/products?sort=popularity",
        "/api/products?limit=-1",
    ] {
        let response = get(sample_app(), uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(response.body["error"], "bad_request", "uri {}", uri);
    }
}

#[tokio::test]
async fn test_invalid_query_values_return_400() {
    let response = get(sample_app(), "/api/products?min_price=50&max_price=10").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"]
        .as_str()
        .unwrap()
        .contains("min_price"));

    let response = get(sample_app(), "/api/products?limit=0").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = get(sample_app(), "/api/products?limit=101").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let response = get(sample_app(), "/api/products/5").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Designing Data-Intensive Applications");

    let response = get(sample_app(), "/api/products/404").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "product not found: 404");

    let response = get(sample_app(), "/api/products/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "bad_request");
}

#[tokio::test]
async fn test_list_categories() {
    let response = get(sample_app(), "/api/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!(["Books", "Electronics", "Kitchen"])
    );
}
