pub mod catalog;

pub use crate::domain::model::{Product, ProductPage, ProductQuery, SortOrder};
pub use crate::domain::ports::{ConfigProvider, ProductRepository, Storage};
pub use crate::utils::error::Result;
pub use catalog::CatalogService;
