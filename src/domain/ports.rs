use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn seed_path(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
    fn max_page_size(&self) -> usize;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Product>>;
    async fn find(&self, id: u64) -> Result<Option<Product>>;
    async fn categories(&self) -> Result<Vec<String>>;
    async fn count(&self) -> Result<usize>;
}
