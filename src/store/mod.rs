//! Item Store Module
//!
//! Persistence seam for the item collection. The whole collection is loaded
//! and rewritten on every access; there are no partial updates.

mod file;
mod memory;

use std::io;
use std::time::SystemTime;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Item;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Repository trait for item persistence.
///
/// Writes are not serialized: two concurrent `list` + `replace_all`
/// sequences can interleave and the later write wins.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Loads the full item collection.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Overwrites the full item collection.
    async fn replace_all(&self, items: &[Item]) -> Result<()>;

    /// Last modification time of the backing data.
    ///
    /// Used as a cheap change signal by the stats cache.
    async fn last_modified(&self) -> io::Result<SystemTime>;

    /// Appends a single item by rewriting the whole collection.
    async fn append(&self, item: Item) -> Result<()> {
        let mut items = self.list().await?;
        items.push(item);
        self.replace_all(&items).await
    }
}
