// kasir_api/src/services/mod.rs

//! Business rules sitting between the HTTP handlers and the repositories.
//! Services know nothing about HTTP; they speak `AppError`.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;

use crate::errors::AppError;
use crate::repositories::RepositoryError;

/// Translates a repository outcome into the service-level error, naming the
/// resource so the eventual 404 body says what was missing.
pub(crate) fn not_found_as(resource: &'static str, id: i64) -> impl FnOnce(RepositoryError) -> AppError {
  move |err| match err {
    RepositoryError::NotFound => AppError::NotFound(format!("{} with ID {} not found.", resource, id)),
    RepositoryError::Database(e) => AppError::Sqlx(e),
  }
}

/// Shared rule for both resources: a name must contain something besides whitespace.
pub(crate) fn require_name(resource: &'static str, name: &str) -> Result<(), AppError> {
  if name.trim().is_empty() {
    return Err(AppError::Validation(format!("{} name cannot be empty.", resource)));
  }
  Ok(())
}
