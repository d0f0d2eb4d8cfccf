//! Stats Module
//!
//! Aggregate price statistics over the item collection, served through a
//! TTL- and modification-aware cache.

mod cache;
mod entry;
mod snapshot;


// Re-export public types
pub use cache::{MissReason, StatsCache, StatsLookup, DEFAULT_STATS_TTL};
pub use entry::CacheEntry;
pub use snapshot::{
    compute_stats, round_cents, PriceRange, PriceSummary, StatsSnapshot, UnavailableStats,
    NO_ITEMS_MESSAGE, NO_PRICE_DATA_MESSAGE,
};
