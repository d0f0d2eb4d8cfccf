//! Items Module
//!
//! Business logic for listing, searching, paginating and creating items.

mod service;

pub use service::ItemsService;
