// kasir_api/src/lib.rs

//! Kasir API: products (`/api/produk`) and categories (`/api/kategori`)
//! served over HTTP from a relational store.
//!
//! Requests move strictly downward through the layers:
//!  - `web` parses paths and bodies and owns the only HTTP knowledge,
//!  - `services` enforce the business rules,
//!  - `repositories` issue the SQL.
//!
//! `state::AppState` is the composition root that wires them together.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
