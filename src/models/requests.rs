//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::models::NewItem;

/// Query string for `GET /api/items`.
///
/// `page` and `limit` are kept as raw strings so that a non-numeric value
/// does not reject the whole request; see [`ListQuery::page_number`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive search over name and category
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListQuery {
    /// Search term, if one was given and is non-empty.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Requested page; `1` when absent, `0` when it is not a number.
    pub fn page_number(&self) -> u64 {
        parse_param(self.page.as_deref(), 1)
    }

    /// Requested page size; `default` when absent, `0` when it is not a number.
    pub fn page_limit(&self, default: u64) -> u64 {
        parse_param(self.limit.as_deref(), default)
    }
}

/// `0` is the "unusable" value: it yields an empty page downstream.
fn parse_param(raw: Option<&str>, default: u64) -> u64 {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or(0),
    }
}

/// Request body for `POST /api/items`.
///
/// Numeric fields are stored as sent, like values read from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    /// Required, checked by the items service
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub stock: Option<Value>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            category: req.category,
            price: req.price,
            rating: req.rating,
            stock: req.stock,
        }
    }
}
