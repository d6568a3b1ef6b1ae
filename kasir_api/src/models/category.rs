// kasir_api/src/models/category.rs

use serde::{Deserialize, Serialize};

/// A product grouping. `description` is never null at this level: an absent
/// description is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: i64,
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: Option<String>, // `null` and omitted both mean ""
}

impl CategoryPayload {
  pub fn into_category(self, id: i64) -> Category {
    Category {
      id,
      name: self.name,
      description: self.description.unwrap_or_default(),
    }
  }
}
