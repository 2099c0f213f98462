use crate::domain::{Product, ProductPage, ProductQuery, ProductRepository, SortOrder};
use crate::utils::error::{Result, ShopError};
use std::cmp::Ordering;
use std::sync::Arc;

pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Listing, lookup and category queries over a product repository.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
    max_page_size: usize,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            repository,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub async fn list(&self, query: &ProductQuery) -> Result<ProductPage> {
        self.validate_query(query)?;

        let mut matches: Vec<Product> = self
            .repository
            .all()
            .await?
            .into_iter()
            .filter(|p| matches_query(p, query))
            .collect();

        sort_products(&mut matches, query.sort.unwrap_or_default());

        let total = matches.len();
        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(self.max_page_size);

        let items: Vec<Product> = matches.into_iter().skip(offset).take(limit).collect();

        tracing::debug!(
            "Listed {} of {} matching products (offset={}, limit={})",
            items.len(),
            total,
            offset,
            limit
        );

        Ok(ProductPage { items, total })
    }

    pub async fn get(&self, id: u64) -> Result<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| ShopError::NotFoundError {
                resource: "product".to_string(),
                id: id.to_string(),
            })
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        self.repository.categories().await
    }

    pub async fn product_count(&self) -> Result<usize> {
        self.repository.count().await
    }

    fn validate_query(&self, query: &ProductQuery) -> Result<()> {
        for (parameter, value) in [("min_price", query.min_price), ("max_price", query.max_price)] {
            if let Some(price) = value {
                if !price.is_finite() || price < 0.0 {
                    return Err(ShopError::InvalidQueryError {
                        parameter: parameter.to_string(),
                        reason: format!("must be a non-negative number, got {}", price),
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(ShopError::InvalidQueryError {
                    parameter: "min_price".to_string(),
                    reason: format!("{} is greater than max_price {}", min, max),
                });
            }
        }

        if let Some(limit) = query.limit {
            if limit == 0 || limit > self.max_page_size {
                return Err(ShopError::InvalidQueryError {
                    parameter: "limit".to_string(),
                    reason: format!("must be between 1 and {}", self.max_page_size),
                });
            }
        }

        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn matches_query(product: &Product, query: &ProductQuery) -> bool {
    if let Some(category) = non_blank(&query.category) {
        if product.category.to_lowercase() != category.to_lowercase() {
            return false;
        }
    }

    if let Some(needle) = non_blank(&query.q) {
        let needle = needle.to_lowercase();
        if !product.name.to_lowercase().contains(&needle)
            && !product.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if query.min_price.is_some_and(|min| product.price < min) {
        return false;
    }
    if query.max_price.is_some_and(|max| product.price > max) {
        return false;
    }

    match query.in_stock {
        Some(wanted) => product.in_stock() == wanted,
        None => true,
    }
}

fn sort_products(products: &mut [Product], order: SortOrder) {
    products.sort_by(|a, b| {
        let primary = match order {
            SortOrder::Id => Ordering::Equal,
            SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::PriceAsc => a.price.total_cmp(&b.price),
            SortOrder::PriceDesc => b.price.total_cmp(&a.price),
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
        };
        // 同值時以 id 排序，確保結果穩定
        primary.then_with(|| a.id.cmp(&b.id))
    });
}
