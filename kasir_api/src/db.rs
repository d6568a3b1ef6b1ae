// kasir_api/src/db.rs

//! Pool construction. Everything above this module sees only an `AnyPool`.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;

/// Opens the shared pool described by `config`.
///
/// The URL scheme picks the driver (`postgres://` or `sqlite:`).
#[instrument(name = "db::init_pool", skip(config), fields(max_connections = config.db_max_connections), err(Display))]
pub async fn init_pool(config: &AppConfig) -> Result<AnyPool> {
  install_default_drivers();

  let pool = AnyPoolOptions::new()
    .max_connections(config.db_max_connections)
    .acquire_timeout(Duration::from_secs(5))
    .connect(&config.database_url)
    .await?;

  info!("Successfully connected to the database.");
  Ok(pool)
}

/// Cheap round trip used by the health endpoint.
pub async fn ping(pool: &AnyPool) -> Result<()> {
  sqlx::query("SELECT 1").execute(pool).await?;
  Ok(())
}
