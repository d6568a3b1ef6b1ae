// kasir_api/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;

/// Liveness plus a store round trip, so a dead pool shows up as a 500.
pub async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  db::ping(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
