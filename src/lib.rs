pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ServerConfig, TomlConfig};

pub use adapters::{InMemoryProductRepository, LocalStorage};
pub use client::CatalogClient;
pub use crate::core::CatalogService;
pub use server::{build_router, AppState};
pub use utils::error::{Result, ShopError};
