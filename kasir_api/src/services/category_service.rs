// kasir_api/src/services/category_service.rs

use tracing::{info, instrument, warn};

use super::{not_found_as, require_name};
use crate::errors::Result;
use crate::models::Category;
use crate::repositories::CategoryRepository;

#[derive(Debug, Clone)]
pub struct CategoryService {
  repo: CategoryRepository,
}

impl CategoryService {
  pub fn new(repo: CategoryRepository) -> Self {
    Self { repo }
  }

  #[instrument(name = "category_service::get_all", skip(self), err(Display))]
  pub async fn get_all(&self) -> Result<Vec<Category>> {
    Ok(self.repo.get_all().await?)
  }

  #[instrument(name = "category_service::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: i64) -> Result<Category> {
    self.repo.get_by_id(id).await.map_err(not_found_as("Category", id))
  }

  #[instrument(name = "category_service::create", skip(self, category), fields(name = %category.name), err(Display))]
  pub async fn create(&self, mut category: Category) -> Result<Category> {
    if let Err(e) = require_name("Category", &category.name) {
      warn!(error = %e, "Rejected category before insert.");
      return Err(e);
    }

    self.repo.create(&mut category).await?;
    info!(id = category.id, "Category created.");
    Ok(category)
  }

  #[instrument(name = "category_service::update", skip(self, category), fields(id = category.id), err(Display))]
  pub async fn update(&self, category: Category) -> Result<Category> {
    require_name("Category", &category.name)?;

    let id = category.id;
    self.repo.update(&category).await.map_err(not_found_as("Category", id))?;
    info!(id, "Category updated.");
    Ok(category)
  }

  #[instrument(name = "category_service::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    self.repo.delete(id).await.map_err(not_found_as("Category", id))?;
    info!(id, "Category deleted.");
    Ok(())
  }
}
