//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::items::ItemsService;
use crate::models::{CreateItemRequest, HealthResponse, Item, ItemPage, ListQuery, StatsResponse};
use crate::stats::StatsCache;
use crate::store::{ItemRepository, JsonFileStore};

/// Application state shared across all handlers.
///
/// Both services share one store; the stats cache is the single instance
/// for the process.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemsService,
    pub stats: Arc<StatsCache>,
    /// Page size used when `limit` is omitted
    pub default_page_limit: u64,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(
        store: Arc<dyn ItemRepository>,
        stats_ttl: Duration,
        default_page_limit: u64,
    ) -> Self {
        Self {
            items: ItemsService::new(store.clone()),
            stats: Arc::new(StatsCache::new(store, stats_ttl)),
            default_page_limit,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Items are read from the JSON file at `config.data_path`.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_path.clone()));
        Self::new(store, config.stats_ttl(), config.default_page_limit)
    }
}

/// Handler for GET /api/items
///
/// Lists items with optional `q` search and `page`/`limit` pagination.
/// A query string that cannot be decoded is rejected with a JSON 400.
pub async fn list_items_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ItemPage>> {
    let Query(query) = query?;

    let page = state
        .items
        .list(
            query.search(),
            query.page_number(),
            query.page_limit(state.default_page_limit),
        )
        .await?;

    Ok(Json(page))
}

/// Handler for GET /api/items/:id
///
/// A non-numeric id cannot match any item and is reported as not found.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let id: u64 = id
        .parse()
        .map_err(|_| CatalogError::NotFound("Item not found".to_string()))?;

    let item = state.items.get_by_id(id).await?;
    Ok(Json(item))
}

/// Handler for POST /api/items
///
/// Creates an item and responds 201 with the assigned id.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>)> {
    let Json(req) = payload?;

    let item = state.items.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /api/stats
///
/// Returns price statistics, flagged with whether they came from cache.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let lookup = state.stats.get_stats().await?;
    Ok(Json(lookup.into()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
