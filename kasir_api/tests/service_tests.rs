// kasir_api/tests/service_tests.rs
mod common;
use common::*;
use futures_util::future::join_all;
use kasir_api::models::{Category, Product};
use kasir_api::AppError;
use std::collections::HashSet;

fn product(name: &str, price: i64) -> Product {
  Product {
    id: 0,
    name: name.to_string(),
    price,
    category_id: None,
  }
}

#[tokio::test]
async fn empty_or_blank_name_is_rejected_before_the_store() {
  let state = fresh_state().await;

  for name in ["", "   "] {
    let err = state.product_service.create(product(name, 1000)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m.contains("name")), "{name:?}: {err:?}");
  }
  let err = state
    .category_service
    .create(Category { id: 0, name: String::new(), description: String::new() })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  // Nothing reached the tables.
  assert!(state.product_service.get_all().await.unwrap().is_empty());
  assert!(state.category_service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_price_is_a_validation_error() {
  let state = fresh_state().await;
  let err = state.product_service.create(product("Kopi", -1)).await.unwrap_err();
  assert!(matches!(err, AppError::Validation(ref m) if m.contains("price")));

  let zero = state.product_service.create(product("Air Putih", 0)).await.unwrap();
  assert!(zero.id > 0);
}

#[tokio::test]
async fn invalid_update_leaves_stored_record_untouched() {
  let state = fresh_state().await;
  let created = state.product_service.create(product("Kopi", 15000)).await.unwrap();

  let err = state
    .product_service
    .update(Product { name: String::new(), ..created.clone() })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
  assert_eq!(state.product_service.get_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn missing_records_surface_as_named_not_found() {
  let state = fresh_state().await;

  let err = state.product_service.get_by_id(99999).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(ref m) if m == "Product with ID 99999 not found."));

  let err = state.category_service.delete(7).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(ref m) if m.contains("Category with ID 7")));

  let err = state
    .category_service
    .update(Category { id: 5, name: "Minuman".to_string(), description: String::new() })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn create_then_fetch_returns_same_record() {
  let state = fresh_state().await;
  let created = state.product_service.create(product("Kopi", 15000)).await.unwrap();
  assert!(created.id > 0);

  let fetched = state.product_service.get_by_id(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_is_not_idempotent_in_signalling() {
  let state = fresh_state().await;
  let created = state.product_service.create(product("Kopi", 15000)).await.unwrap();

  state.product_service.delete(created.id).await.unwrap();
  assert!(matches!(state.product_service.delete(created.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn concurrent_creates_never_share_an_id() {
  let state = fresh_state().await;
  let service = &state.product_service;

  let results = join_all((0..25).map(|i| service.create(product(&format!("Produk {}", i), i * 100)))).await;
  let ids: Vec<i64> = results.into_iter().map(|r| r.unwrap().id).collect();

  let unique: HashSet<i64> = ids.iter().copied().collect();
  assert_eq!(unique.len(), ids.len());
  assert!(ids.iter().all(|id| *id > 0));
  assert_eq!(service.get_all().await.unwrap().len(), 25);
}
