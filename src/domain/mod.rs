// Domain layer: catalog models and ports. Nothing here knows about HTTP.

pub mod model;
pub mod ports;

pub use model::{Product, ProductPage, ProductQuery, SortOrder};
pub use ports::{ConfigProvider, ProductRepository, Storage};
