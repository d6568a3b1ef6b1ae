// kasir_api/src/state.rs

use sqlx::AnyPool;

use crate::repositories::{CategoryRepository, ProductRepository};
use crate::services::{CategoryService, ProductService};

/// Everything the handlers need, wired by hand: pool → repository → service.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: AnyPool,
  pub product_service: ProductService,
  pub category_service: CategoryService,
}

impl AppState {
  pub fn new(db_pool: AnyPool) -> Self {
    let product_repo = ProductRepository::new(db_pool.clone());
    let category_repo = CategoryRepository::new(db_pool.clone());
    tracing::debug!("Repositories created.");

    let product_service = ProductService::new(product_repo);
    let category_service = CategoryService::new(category_repo);
    tracing::debug!("Services created.");

    Self {
      db_pool,
      product_service,
      category_service,
    }
  }
}
