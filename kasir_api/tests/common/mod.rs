// kasir_api/tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use kasir_api::{db, AppConfig, AppState};
use once_cell::sync::Lazy;
use sqlx::AnyPool;
use tracing::Level;

// SQLite flavour of schema.sql. AUTOINCREMENT keeps deleted ids from being reused.
const SCHEMA: &[&str] = &[
  "CREATE TABLE categories (
     id INTEGER PRIMARY KEY AUTOINCREMENT,
     name TEXT NOT NULL,
     description TEXT
   )",
  "CREATE TABLE products (
     id INTEGER PRIMARY KEY AUTOINCREMENT,
     name TEXT NOT NULL,
     price BIGINT NOT NULL,
     category_id BIGINT
   )",
];

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Fresh, empty store for one test.
///
/// Every connection to `sqlite::memory:` is its own database, so the pool is
/// capped at a single connection to keep the schema visible to all queries.
pub async fn fresh_pool() -> AnyPool {
  setup_tracing();
  let config = AppConfig::from_lookup(|key| match key {
    "DB_CONN" => Some("sqlite::memory:".to_string()),
    "DB_MAX_CONNECTIONS" => Some("1".to_string()),
    _ => None,
  })
  .expect("test config should parse");

  let pool = db::init_pool(&config).await.expect("in-memory sqlite should open");
  for statement in SCHEMA {
    sqlx::query(statement).execute(&pool).await.expect("schema should apply");
  }
  pool
}

pub async fn fresh_state() -> AppState {
  AppState::new(fresh_pool().await)
}
