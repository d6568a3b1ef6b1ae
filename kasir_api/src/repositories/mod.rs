// kasir_api/src/repositories/mod.rs

//! Persistence access. Repositories are the only code that talks SQL; they
//! return typed outcomes and never raw driver "no rows" signals.

use thiserror::Error;

pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
  /// Zero rows matched a lookup, or a write affected zero rows.
  #[error("record not found")]
  NotFound,

  #[error(transparent)]
  Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = std::result::Result<T, RepositoryError>;

/// Resolves a nullable text column to its domain value.
///
/// Absent values become the empty string; nothing above the repository
/// layer ever sees the `Option`.
pub fn text_or_empty(value: Option<String>) -> String {
  value.unwrap_or_default()
}

/// Maps a write's affected-row count onto the NotFound contract.
pub(crate) fn expect_affected(rows_affected: u64) -> RepoResult<()> {
  if rows_affected == 0 {
    Err(RepositoryError::NotFound)
  } else {
    Ok(())
  }
}
