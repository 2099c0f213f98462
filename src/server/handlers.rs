use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, HeaderValue, Uri},
    Json,
};
use serde_json::{json, Value};

use crate::domain::{Product, ProductQuery};

use super::{error::ApiError, AppState};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = state.catalog.product_count().await?;
    Ok(Json(json!({
        "status": "ok",
        "service": "shop-api",
        "products": products,
    })))
}

/// `GET /api/products`. Always answers with a JSON array, possibly empty.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<(HeaderMap, Json<Vec<Product>>), ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let page = state.catalog.list(&query).await?;

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total));

    Ok((headers, Json(page.items)))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let product = state.catalog.get(id).await?;
    Ok(Json(product))
}

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.catalog.categories().await?))
}

/// Fallback for every path without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::not_found(format!("no route for {}", uri.path())).with_path(uri.path())
}
