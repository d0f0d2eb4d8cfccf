//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/items` - List items with search and pagination
//! - `GET /api/items/:id` - Retrieve an item by id
//! - `POST /api/items` - Create an item
//! - `GET /api/stats` - Cached price statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
