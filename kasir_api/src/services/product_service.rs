// kasir_api/src/services/product_service.rs

use tracing::{info, instrument, warn};

use super::{not_found_as, require_name};
use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::repositories::ProductRepository;

#[derive(Debug, Clone)]
pub struct ProductService {
  repo: ProductRepository,
}

impl ProductService {
  pub fn new(repo: ProductRepository) -> Self {
    Self { repo }
  }

  fn validate(product: &Product) -> Result<()> {
    require_name("Product", &product.name)?;
    if product.price < 0 {
      return Err(AppError::Validation("Product price cannot be negative.".to_string()));
    }
    // category_id is stored as given; whether that category exists is not checked.
    Ok(())
  }

  #[instrument(name = "product_service::get_all", skip(self), err(Display))]
  pub async fn get_all(&self) -> Result<Vec<Product>> {
    Ok(self.repo.get_all().await?)
  }

  #[instrument(name = "product_service::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: i64) -> Result<Product> {
    self.repo.get_by_id(id).await.map_err(not_found_as("Product", id))
  }

  #[instrument(name = "product_service::create", skip(self, product), fields(name = %product.name), err(Display))]
  pub async fn create(&self, mut product: Product) -> Result<Product> {
    if let Err(e) = Self::validate(&product) {
      warn!(error = %e, "Rejected product before insert.");
      return Err(e);
    }

    self.repo.create(&mut product).await?;
    info!(id = product.id, "Product created.");
    Ok(product)
  }

  /// Full replace of the product identified by `product.id`.
  #[instrument(name = "product_service::update", skip(self, product), fields(id = product.id), err(Display))]
  pub async fn update(&self, product: Product) -> Result<Product> {
    Self::validate(&product)?;

    let id = product.id;
    self.repo.update(&product).await.map_err(not_found_as("Product", id))?;
    info!(id, "Product updated.");
    Ok(product)
  }

  #[instrument(name = "product_service::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    self.repo.delete(id).await.map_err(not_found_as("Product", id))?;
    info!(id, "Product deleted.");
    Ok(())
  }
}
