// kasir_api/src/models/mod.rs

//! Domain records exchanged between the repository, service and handler layers.

pub mod category;
pub mod product;

// Re-export the model structs for convenient access
pub use category::{Category, CategoryPayload};
pub use product::{Product, ProductPayload};
