use crate::domain::{Product, Storage};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::validate_file_extension;
use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use std::path::Path;

pub const SEED_EXTENSIONS: &[&str] = &["json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Csv,
}

impl SeedFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        validate_file_extension("catalog.seed_path", path, SEED_EXTENSIONS)?;

        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(SeedFormat::Csv),
            _ => Ok(SeedFormat::Json),
        }
    }
}

/// Reads a seed file through `storage` and returns validated products.
pub async fn load_products<S: Storage>(storage: &S, path: &str) -> Result<Vec<Product>> {
    let format = SeedFormat::from_path(path)?;
    let bytes = storage.read_file(path).await?;

    tracing::debug!("Read {} bytes of {:?} seed data from {}", bytes.len(), format, path);

    let products = parse_products(&bytes, format)?;
    validate_products(&products)?;

    tracing::info!("Loaded {} products from {}", products.len(), path);
    Ok(products)
}

pub fn parse_products(bytes: &[u8], format: SeedFormat) -> Result<Vec<Product>> {
    match format {
        SeedFormat::Json => Ok(serde_json::from_slice(bytes)?),
        SeedFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_reader(bytes);

            let mut products = Vec::new();
            for row in reader.deserialize() {
                products.push(row?);
            }
            Ok(products)
        }
    }
}

pub fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.id) {
            return Err(ShopError::ValidationError {
                message: format!("duplicate product id {}", product.id),
            });
        }

        if product.name.trim().is_empty() {
            return Err(ShopError::ValidationError {
                message: format!("product {} has an empty name", product.id),
            });
        }

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ShopError::ValidationError {
                message: format!(
                    "product {} ({}) has an invalid price: {}",
                    product.id, product.name, product.price
                ),
            });
        }
    }

    Ok(())
}

/// Built-in catalog used when no seed file is configured.
pub fn sample_products() -> Vec<Product> {
    let rows: [(u64, &str, &str, &str, f64, u32); 8] = [
        (1, "Wireless Mouse", "Ergonomic 2.4GHz mouse with silent clicks", "Electronics", 24.99, 120),
        (2, "Mechanical Keyboard", "Tenkeyless keyboard with brown switches", "Electronics", 89.50, 35),
        (3, "USB-C Hub", "7-in-1 hub with HDMI and card reader", "Electronics", 39.00, 0),
        (4, "The Rust Programming Language", "Paperback, second edition", "Books", 44.95, 60),
        (5, "Designing Data-Intensive Applications", "Paperback", "Books", 52.00, 18),
        (6, "Pour-Over Coffee Set", "Glass dripper, carafe and 100 filters", "Kitchen", 32.00, 42),
        (7, "Cast Iron Skillet", "Pre-seasoned 10-inch skillet", "Kitchen", 27.49, 0),
        (8, "Chef's Knife", "8-inch stainless steel chef's knife", "Kitchen", 64.00, 9),
    ];

    rows.into_iter()
        .map(|(id, name, description, category, price, stock)| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price,
            stock,
            created_at: Utc
                .with_ymd_and_hms(2024, 1, id as u32, 9, 0, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}
