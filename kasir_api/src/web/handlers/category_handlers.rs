// kasir_api/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use super::parse_id;
use crate::errors::AppError;
use crate::models::CategoryPayload;
use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.category_service.get_all().await?;
  info!("Successfully fetched {} categories.", categories.len());
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::create_category", skip(app_state, payload))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.category_service.create(payload.into_inner().into_category(0)).await?;
  Ok(HttpResponse::Created().json(category))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("Category", &path)?;
  let category = app_state.category_service.get_by_id(id).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::update_category", skip(app_state, path, payload), fields(category_id = %path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("Category", &path)?;
  let category = app_state.category_service.update(payload.into_inner().into_category(id)).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::delete_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn delete_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("Category", &path)?;
  app_state.category_service.delete(id).await?;
  Ok(HttpResponse::Ok().finish())
}
