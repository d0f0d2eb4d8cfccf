//! Stats Cache Module
//!
//! Serves price statistics from a cached snapshot while the item data is
//! unchanged, bounded by a fixed TTL.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{compute_stats, CacheEntry, StatsSnapshot};
use crate::error::Result;
use crate::store::ItemRepository;

/// Default maximum age of a cached snapshot.
pub const DEFAULT_STATS_TTL: Duration = Duration::from_secs(5 * 60);

/// Result of a stats lookup.
#[derive(Debug, Clone)]
pub struct StatsLookup {
    pub stats: StatsSnapshot,
    /// True when no recomputation happened
    pub from_cache: bool,
    /// Whole seconds since computation, only for cache hits
    pub cache_age: Option<u64>,
}

/// Why a cached snapshot could not be served.
#[derive(Debug)]
pub enum MissReason {
    /// Nothing has been computed yet
    Empty,
    /// The snapshot is older than the TTL
    Expired,
    /// The backing data changed since the snapshot was computed
    SourceModified,
    /// The modification time could not be read
    SourceUnavailable(io::Error),
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::Empty => write!(f, "empty"),
            MissReason::Expired => write!(f, "ttl expired"),
            MissReason::SourceModified => write!(f, "source modified"),
            MissReason::SourceUnavailable(e) => write!(f, "source mtime unavailable: {}", e),
        }
    }
}

// == Stats Cache ==
/// Single owned cache of the aggregate statistics.
///
/// The lock only guards swapping the entry in and out. It is never held
/// across a store read, so two concurrent misses both recompute and the
/// later one replaces the entry.
pub struct StatsCache {
    store: Arc<dyn ItemRepository>,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl StatsCache {
    // == Constructor ==
    /// Creates an empty cache over `store` with the given TTL.
    pub fn new(store: Arc<dyn ItemRepository>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            entry: RwLock::new(None),
        }
    }

    // == Get Stats ==
    /// Returns the statistics, recomputing them when the cached snapshot is
    /// missing, older than the TTL, or computed against different data.
    ///
    /// Store read failures propagate unchanged; validity-check failures only
    /// force a recomputation.
    pub async fn get_stats(&self) -> Result<StatsLookup> {
        let current = self.entry.read().await.clone();

        match self.check(current).await {
            Ok(entry) => {
                debug!("Serving stats from cache");
                return Ok(StatsLookup {
                    cache_age: Some(entry.age_secs()),
                    stats: entry.data,
                    from_cache: true,
                });
            }
            Err(MissReason::SourceUnavailable(e)) => {
                warn!("Error checking item data modification time: {}", e);
            }
            Err(reason) => {
                info!("Stats cache miss ({}), calculating fresh stats", reason);
            }
        }

        let stats = self.refresh().await?;
        Ok(StatsLookup {
            stats,
            from_cache: false,
            cache_age: None,
        })
    }

    /// Checks an entry in order: present, within TTL, source unchanged.
    async fn check(
        &self,
        entry: Option<CacheEntry>,
    ) -> std::result::Result<CacheEntry, MissReason> {
        let entry = entry.ok_or(MissReason::Empty)?;

        if entry.is_expired(self.ttl) {
            return Err(MissReason::Expired);
        }

        let current = self
            .store
            .last_modified()
            .await
            .map_err(MissReason::SourceUnavailable)?;
        if entry.source_changed(current) {
            return Err(MissReason::SourceModified);
        }

        Ok(entry)
    }

    // == Refresh ==
    /// Recomputes the snapshot and replaces the cached entry.
    ///
    /// The modification time is read before the items, so a write racing
    /// with the read leaves a mismatched stamp and forces another miss
    /// rather than pinning stale data.
    async fn refresh(&self) -> Result<StatsSnapshot> {
        let source_modified = match self.store.last_modified().await {
            Ok(modified) => Some(modified),
            Err(e) => {
                warn!("Item data modification time unavailable: {}", e);
                None
            }
        };

        let items = self.store.list().await?;
        let entry = CacheEntry::new(compute_stats(&items), source_modified);
        let stats = entry.data.clone();

        *self.entry.write().await = Some(entry);
        info!("Stats cache updated over {} items", items.len());

        Ok(stats)
    }
}
