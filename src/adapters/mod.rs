// Adapters layer: concrete implementations of the domain ports.

pub mod memory;
pub mod seed;
pub mod storage;

pub use memory::InMemoryProductRepository;
pub use storage::LocalStorage;
