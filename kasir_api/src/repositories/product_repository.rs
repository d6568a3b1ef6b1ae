// kasir_api/src/repositories/product_repository.rs

use sqlx::{AnyPool, FromRow};
use tracing::{debug, instrument};

use super::{expect_affected, RepoResult, RepositoryError};
use crate::models::Product;

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  price: i64,
  category_id: Option<i64>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      price: row.price,
      category_id: row.category_id,
    }
  }
}

#[derive(Debug, Clone)]
pub struct ProductRepository {
  db_pool: AnyPool,
}

impl ProductRepository {
  pub fn new(db_pool: AnyPool) -> Self {
    Self { db_pool }
  }

  #[instrument(name = "product_repo::get_all", skip(self), err(Display))]
  pub async fn get_all(&self) -> RepoResult<Vec<Product>> {
    let rows: Vec<ProductRow> =
      sqlx::query_as("SELECT id, name, price, category_id FROM products ORDER BY id")
        .fetch_all(&self.db_pool)
        .await?;

    debug!(count = rows.len(), "Fetched products.");
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "product_repo::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: i64) -> RepoResult<Product> {
    let row: Option<ProductRow> =
      sqlx::query_as("SELECT id, name, price, category_id FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

    row.map(Product::from).ok_or(RepositoryError::NotFound)
  }

  /// Inserts `product` and writes the store-assigned id back into it.
  #[instrument(name = "product_repo::create", skip(self, product), fields(name = %product.name), err(Display))]
  pub async fn create(&self, product: &mut Product) -> RepoResult<()> {
    let id: i64 =
      sqlx::query_scalar("INSERT INTO products (name, price, category_id) VALUES ($1, $2, $3) RETURNING id")
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id)
        .fetch_one(&self.db_pool)
        .await?;

    product.id = id;
    debug!(id, "Product inserted.");
    Ok(())
  }

  #[instrument(name = "product_repo::update", skip(self, product), fields(id = product.id), err(Display))]
  pub async fn update(&self, product: &Product) -> RepoResult<()> {
    let result = sqlx::query("UPDATE products SET name = $1, price = $2, category_id = $3 WHERE id = $4")
      .bind(&product.name)
      .bind(product.price)
      .bind(product.category_id)
      .bind(product.id)
      .execute(&self.db_pool)
      .await?;

    expect_affected(result.rows_affected())
  }

  #[instrument(name = "product_repo::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.db_pool)
      .await?;

    expect_affected(result.rows_affected())
  }
}
