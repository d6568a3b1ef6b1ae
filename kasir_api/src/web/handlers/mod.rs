// kasir_api/src/web/handlers/mod.rs

// Declare handler modules
pub mod category_handlers;
pub mod health_handlers;
pub mod product_handlers;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;

/// Parses the trailing `{id}` segment of an item path.
///
/// Anything that is not a base-10 integer is a client error; whether the
/// id exists is left to the service.
pub fn parse_id(resource: &str, raw: &str) -> Result<i64, AppError> {
  raw
    .parse::<i64>()
    .map_err(|_| AppError::Validation(format!("Invalid {} ID: '{}'", resource, raw)))
}

/// JSON extractor settings: malformed bodies become `AppError::Validation`
/// so they share the `{"error": ...}` shape of every other failure.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    AppError::Validation(format!("Malformed request body: {}", err)).into()
  })
}

/// Default service for matched paths whose verb has no route.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::MethodNotAllowed {
    method: req.method().to_string(),
    path: req.path().to_string(),
  })
}

/// Default service for paths nothing is registered under.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::RouteNotFound(req.path().to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_id_accepts_integers() {
    assert_eq!(parse_id("Product", "42").unwrap(), 42);
    assert_eq!(parse_id("Product", "-3").unwrap(), -3);
  }

  #[test]
  fn parse_id_rejects_non_integers() {
    for raw in ["abc", "1.5", "", " 7", "99999999999999999999"] {
      let err = parse_id("Category", raw).unwrap_err();
      assert!(matches!(err, AppError::Validation(ref m) if m.contains("Invalid Category ID")), "{raw:?}");
    }
  }
}
