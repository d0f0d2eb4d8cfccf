//! Catalog Server - A small product-catalog REST backend
//!
//! Serves items from a flat JSON file, with search, pagination, creation and
//! cached aggregate price statistics.

pub mod api;
pub mod config;
pub mod error;
pub mod items;
pub mod models;
pub mod stats;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::CatalogError;
