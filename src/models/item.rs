//! Item domain records
//!
//! `Item` is the shape persisted in the backing file and returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry.
///
/// Numeric fields keep the raw JSON value so that a malformed price on one
/// record only disqualifies that record, and integers are written back as
/// integers. Keys beyond the known fields are carried in `extra` and written
/// back unchanged. Absent optional fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned as `max(existing ids) + 1`
    pub id: u64,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<Value>,
    /// Any other keys present in the backing file, e.g. `description`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Builds an item from a validated payload and an assigned id.
    pub fn from_new(id: u64, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
            rating: new.rating,
            stock: new.stock,
            extra: Map::new(),
        }
    }

    /// Case-insensitive substring match over `name` and `category`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|category| category.to_lowercase().contains(needle))
    }

    /// Price when it is present, a JSON number, and finite.
    pub fn valid_price(&self) -> Option<f64> {
        self.price
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|price| price.is_finite())
    }
}

/// Payload for creating an item; the id is assigned by the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: Option<String>,
    pub price: Option<Value>,
    pub rating: Option<Value>,
    pub stock: Option<Value>,
}

impl NewItem {
    /// Creates a payload with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
