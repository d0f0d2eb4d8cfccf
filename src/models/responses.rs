//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Item;
use crate::stats::{StatsLookup, StatsSnapshot};

/// Response body for the list operation (GET /api/items)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    /// Items on the requested page
    pub items: Vec<Item>,
    /// Number of items matching the search, across all pages
    pub total_items: usize,
    /// `ceil(total_items / limit)`, or 0 for an unusable limit
    pub total_pages: u64,
    /// The page that was requested (0 when it was not a number)
    pub current_page: u64,
}

/// Response body for the stats endpoint (GET /api/stats)
///
/// The snapshot fields are flattened next to the cache metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: StatsSnapshot,
    /// Whether the snapshot was served without recomputation
    pub cached: bool,
    /// Seconds since the snapshot was computed, present on cache hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
}

impl StatsResponse {
    /// Creates a response for a freshly computed snapshot
    pub fn fresh(stats: StatsSnapshot) -> Self {
        Self {
            stats,
            cached: false,
            cache_age: None,
        }
    }

    /// Creates a response for a snapshot served from cache
    pub fn cached(stats: StatsSnapshot, cache_age: u64) -> Self {
        Self {
            stats,
            cached: true,
            cache_age: Some(cache_age),
        }
    }
}

impl From<StatsLookup> for StatsResponse {
    fn from(lookup: StatsLookup) -> Self {
        match lookup.cache_age {
            Some(age) if lookup.from_cache => StatsResponse::cached(lookup.stats, age),
            _ => StatsResponse::fresh(lookup.stats),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use serde_json::json;

    #[test]
    fn test_item_page_camel_case() {
        let page = ItemPage {
            items: vec![],
            total_items: 12,
            total_pages: 3,
            current_page: 2,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            json!({ "items": [], "totalItems": 12, "totalPages": 3, "currentPage": 2 })
        );
    }

    #[test]
    fn test_stats_response_fresh_omits_age() {
        let resp = StatsResponse::fresh(compute_stats(&[]));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["total"], 0);
        assert_eq!(json["message"], "No items found");
        assert_eq!(json["cached"], false);
        assert!(json.get("cacheAge").is_none());
    }

    #[test]
    fn test_stats_response_cached_has_age() {
        let resp = StatsResponse::cached(compute_stats(&[]), 42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["cached"], true);
        assert_eq!(json["cacheAge"], 42);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Item not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Item not found"}"#);
    }
}
