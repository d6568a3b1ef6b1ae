// kasir_api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use kasir_api::config::{AppConfig, LogFormat};
use kasir_api::web::{configure_app_routes, routes::ENDPOINTS};
use kasir_api::{db, AppState};

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config is read before tracing exists so LOG_FORMAT can pick the subscriber.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!("Starting kasir API server...");
  // The connection string may carry credentials, so it is never logged.
  tracing::info!(
    host = %app_config.server_host,
    port = app_config.server_port,
    max_connections = app_config.db_max_connections,
    "Application configuration loaded."
  );

  let db_pool = db::init_pool(&app_config).await.context("Failed to connect to the database")?;

  // Repository -> Service wiring happens inside AppState::new; handlers reach
  // services through it.
  let app_state = AppState::new(db_pool.clone());
  tracing::info!("Repositories, services and handlers wired.");

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);
  for (method, path, action) in ENDPOINTS {
    tracing::info!("  {:<6} {:<20} {}", method, path, action);
  }

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  db_pool.close().await;
  tracing::info!("Server stopped, database pool closed.");
  Ok(())
}
