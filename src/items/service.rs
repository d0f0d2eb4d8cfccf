//! Items Service
//!
//! Search, pagination, lookup and creation over the item store.

use std::sync::Arc;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::{Item, ItemPage, NewItem};
use crate::store::ItemRepository;

/// Service layer for item business logic.
#[derive(Clone)]
pub struct ItemsService {
    store: Arc<dyn ItemRepository>,
}

impl ItemsService {
    pub fn new(store: Arc<dyn ItemRepository>) -> Self {
        Self { store }
    }

    // == List ==
    /// Lists items matching `search` (case-insensitive, over name and
    /// category), sliced to the requested 1-based page.
    ///
    /// A `page` or `limit` of 0 marks an unusable parameter and yields an
    /// empty page; out-of-range pages are empty too, never an error.
    pub async fn list(&self, search: Option<&str>, page: u64, limit: u64) -> Result<ItemPage> {
        let items = self.store.list().await?;

        let filtered: Vec<Item> = match search.filter(|q| !q.is_empty()) {
            Some(q) => {
                let needle = q.to_lowercase();
                items.into_iter().filter(|item| item.matches(&needle)).collect()
            }
            None => items,
        };

        let total_items = filtered.len();
        let total_pages = if limit == 0 {
            0
        } else {
            (total_items as u64).div_ceil(limit)
        };

        let items = if page == 0 || limit == 0 {
            Vec::new()
        } else {
            let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
            let take = usize::try_from(limit).unwrap_or(usize::MAX);
            filtered.into_iter().skip(start).take(take).collect()
        };

        Ok(ItemPage {
            items,
            total_items,
            total_pages,
            current_page: page,
        })
    }

    // == Get By Id ==
    /// Returns the item with the exact id.
    pub async fn get_by_id(&self, id: u64) -> Result<Item> {
        self.store
            .list()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CatalogError::NotFound("Item not found".to_string()))
    }

    // == Create ==
    /// Validates the payload, assigns `max(existing ids) + 1` and rewrites the
    /// collection.
    ///
    /// Concurrent creates are not serialized and can be assigned the same id.
    pub async fn create(&self, new: NewItem) -> Result<Item> {
        if new.name.is_empty() {
            return Err(CatalogError::InvalidInput("Name is required".to_string()));
        }

        let mut items = self.store.list().await?;
        let item = Item::from_new(next_id(&items), new);
        items.push(item.clone());

        self.store.replace_all(&items).await?;

        info!(item_id = item.id, "Created item");
        Ok(item)
    }
}

fn next_id(items: &[Item]) -> u64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}
