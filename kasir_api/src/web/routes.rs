// kasir_api/src/web/routes.rs

use actix_web::{web, Route};

use crate::web::handlers::{
  category_handlers, health_handlers, json_config, method_not_allowed, product_handlers, route_not_found,
};

pub const PRODUCTS_PATH: &str = "/api/produk";
pub const CATEGORIES_PATH: &str = "/api/kategori";

/// Registers the two route families every resource has: the bare collection
/// path and the item path with one trailing `{id}` segment. Verbs without a
/// route on a matched path get a 405 instead of falling through.
fn register_crud_resource(
  cfg: &mut web::ServiceConfig,
  base_path: &str,
  collection_routes: Vec<Route>,
  item_routes: Vec<Route>,
) {
  let collection = collection_routes
    .into_iter()
    .fold(web::resource(base_path), |resource, route| resource.route(route))
    .default_service(web::to(method_not_allowed));

  let item = item_routes
    .into_iter()
    .fold(web::resource(format!("{}/{{id}}", base_path)), |resource, route| resource.route(route))
    .default_service(web::to(method_not_allowed));

  cfg.service(collection).service(item);
}

/// Builds the whole routing table. Called once per worker from the
/// `HttpServer` factory in `main.rs` (and from the HTTP tests); nothing
/// registers routes anywhere else.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config());

  cfg.route("/health", web::get().to(health_handlers::health_check_handler));

  register_crud_resource(
    cfg,
    PRODUCTS_PATH,
    vec![
      web::get().to(product_handlers::list_products_handler),
      web::post().to(product_handlers::create_product_handler),
    ],
    vec![
      web::get().to(product_handlers::get_product_handler),
      web::put().to(product_handlers::update_product_handler),
      web::delete().to(product_handlers::delete_product_handler),
    ],
  );

  register_crud_resource(
    cfg,
    CATEGORIES_PATH,
    vec![
      web::get().to(category_handlers::list_categories_handler),
      web::post().to(category_handlers::create_category_handler),
    ],
    vec![
      web::get().to(category_handlers::get_category_handler),
      web::put().to(category_handlers::update_category_handler),
      web::delete().to(category_handlers::delete_category_handler),
    ],
  );

  cfg.default_service(web::to(route_not_found));
}

/// Human-readable endpoint table, logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
  ("GET", "/api/produk", "list all products"),
  ("POST", "/api/produk", "create product"),
  ("GET", "/api/produk/{id}", "fetch product"),
  ("PUT", "/api/produk/{id}", "replace product"),
  ("DELETE", "/api/produk/{id}", "delete product"),
  ("GET", "/api/kategori", "list all categories"),
  ("POST", "/api/kategori", "create category"),
  ("GET", "/api/kategori/{id}", "fetch category"),
  ("PUT", "/api/kategori/{id}", "replace category"),
  ("DELETE", "/api/kategori/{id}", "delete category"),
  ("GET", "/health", "liveness and database ping"),
];
