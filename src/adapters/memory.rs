use crate::adapters::seed::validate_products;
use crate::domain::{Product, ProductRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        validate_products(&products)?;
        Ok(Self {
            products: RwLock::new(products),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Swaps the whole catalog. The old set stays in place if validation fails.
    pub async fn replace(&self, products: Vec<Product>) -> Result<()> {
        validate_products(&products)?;
        let mut guard = self.products.write().await;
        tracing::debug!("Replacing catalog: {} -> {} products", guard.len(), products.len());
        *guard = products;
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find(&self, id: u64) -> Result<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let categories: BTreeSet<String> = self
            .products
            .read()
            .await
            .iter()
            .map(|p| p.category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.products.read().await.len())
    }
}
