// kasir_api/src/repositories/category_repository.rs

use sqlx::{AnyPool, FromRow};
use tracing::{debug, instrument};

use super::{expect_affected, text_or_empty, RepoResult, RepositoryError};
use crate::models::Category;

// `description` is nullable in storage; the row keeps the Option and the
// conversion below resolves it.
#[derive(Debug, FromRow)]
struct CategoryRow {
  id: i64,
  name: String,
  description: Option<String>,
}

impl From<CategoryRow> for Category {
  fn from(row: CategoryRow) -> Self {
    Category {
      id: row.id,
      name: row.name,
      description: text_or_empty(row.description),
    }
  }
}

#[derive(Debug, Clone)]
pub struct CategoryRepository {
  db_pool: AnyPool,
}

impl CategoryRepository {
  pub fn new(db_pool: AnyPool) -> Self {
    Self { db_pool }
  }

  #[instrument(name = "category_repo::get_all", skip(self), err(Display))]
  pub async fn get_all(&self) -> RepoResult<Vec<Category>> {
    let rows: Vec<CategoryRow> = sqlx::query_as("SELECT id, name, description FROM categories ORDER BY id")
      .fetch_all(&self.db_pool)
      .await?;

    debug!(count = rows.len(), "Fetched categories.");
    Ok(rows.into_iter().map(Category::from).collect())
  }

  #[instrument(name = "category_repo::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: i64) -> RepoResult<Category> {
    let row: Option<CategoryRow> = sqlx::query_as("SELECT id, name, description FROM categories WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.db_pool)
      .await?;

    row.map(Category::from).ok_or(RepositoryError::NotFound)
  }

  /// Inserts `category` and writes the store-assigned id back into it.
  #[instrument(name = "category_repo::create", skip(self, category), fields(name = %category.name), err(Display))]
  pub async fn create(&self, category: &mut Category) -> RepoResult<()> {
    let id: i64 = sqlx::query_scalar("INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id")
      .bind(&category.name)
      .bind(&category.description)
      .fetch_one(&self.db_pool)
      .await?;

    category.id = id;
    debug!(id, "Category inserted.");
    Ok(())
  }

  #[instrument(name = "category_repo::update", skip(self, category), fields(id = category.id), err(Display))]
  pub async fn update(&self, category: &Category) -> RepoResult<()> {
    let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
      .bind(&category.name)
      .bind(&category.description)
      .bind(category.id)
      .execute(&self.db_pool)
      .await?;

    expect_affected(result.rows_affected())
  }

  #[instrument(name = "category_repo::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
      .bind(id)
      .execute(&self.db_pool)
      .await?;

    expect_affected(result.rows_affected())
  }
}
