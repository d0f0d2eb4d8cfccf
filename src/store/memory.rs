//! In-memory item store, for development and tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItemRepository;
use crate::error::Result;
use crate::models::Item;

/// Item store held in process memory.
///
/// Every write advances the reported modification time, so the stats cache
/// sees changes the same way it does for a file.
#[derive(Debug)]
pub struct InMemoryStore {
    items: RwLock<Vec<Item>>,
    modified: RwLock<SystemTime>,
    reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
            modified: RwLock::new(SystemTime::now()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of `list` calls served so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Advances the modification time without changing the data.
    pub async fn touch(&self) {
        let mut modified = self.modified.write().await;
        *modified = SystemTime::now().max(*modified + Duration::from_nanos(1));
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.read().await.clone())
    }

    async fn replace_all(&self, items: &[Item]) -> Result<()> {
        *self.items.write().await = items.to_vec();
        self.touch().await;
        Ok(())
    }

    async fn last_modified(&self) -> io::Result<SystemTime> {
        Ok(*self.modified.read().await)
    }
}
