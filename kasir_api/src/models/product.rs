// kasir_api/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A sellable item. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  /// Amount in the smallest currency unit, e.g. `15000` rupiah.
  pub price: i64,
  pub category_id: Option<i64>,
}

/// Request body for `POST /api/produk` and `PUT /api/produk/{id}`.
///
/// There is no `id` field: an `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
  // Missing name falls through to the service's validation message.
  #[serde(default)]
  pub name: String,
  pub price: i64,
  #[serde(default)]
  pub category_id: Option<i64>,
}

impl ProductPayload {
  pub fn into_product(self, id: i64) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      category_id: self.category_id,
    }
  }
}
