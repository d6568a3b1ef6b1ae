// kasir_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  // Raised by the router, never by the layers below the handlers.
  #[error("No route matches {0}")]
  RouteNotFound(String),

  #[error("Method {method} is not allowed on {path}")]
  MethodNotAllowed { method: String, path: String },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// A repository NotFound reaching this conversion has lost its resource context,
// so services map it themselves and only storage failures travel through here.
impl From<RepositoryError> for AppError {
  fn from(err: RepositoryError) -> Self {
    match err {
      RepositoryError::NotFound => AppError::NotFound("Requested record does not exist.".to_string()),
      RepositoryError::Database(e) => AppError::Sqlx(e),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
      AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      // Full detail goes to the log only; the client gets a generic message.
      tracing::error!(application_error = %self, "Responding with server error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }

    let message = match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      AppError::RouteNotFound(_) | AppError::MethodNotAllowed { .. } => self.to_string(),
      AppError::Sqlx(_) => "Database operation failed".to_string(),
      AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
    };

    HttpResponse::build(status).json(json!({ "error": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
