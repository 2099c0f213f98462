use crate::domain::{Product, ProductQuery};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Status and parsed body of a raw GET.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub status: u16,
    pub body: Value,
}

impl ProbeResult {
    pub fn is_array(&self) -> bool {
        self.body.is_array()
    }
}

/// HTTP client for the catalog endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("base_url", base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let url = self.url("/api/products");
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }

        Ok(response.json().await?)
    }

    /// `Ok(None)` when the server answers 404.
    pub async fn get_product(&self, id: u64) -> Result<Option<Product>> {
        let url = self.url(&format!("/api/products/{}", id));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }

        Ok(Some(response.json().await?))
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url("/api/categories")).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }

        Ok(response.json().await?)
    }

    /// Raw GET that never fails on status. Non-JSON bodies become `Value::Null`.
    pub async fn probe(&self, path: &str) -> Result<ProbeResult> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        tracing::debug!("Probe {} -> {}", path, status);
        Ok(ProbeResult { status, body })
    }
}

async fn upstream_error(status: StatusCode, response: reqwest::Response) -> ShopError {
    let body = response.text().await.unwrap_or_default();
    ShopError::UpstreamStatusError {
        status: status.as_u16(),
        body,
    }
}
