//! Cache Entry Module
//!
//! Defines the cached statistics snapshot and the metadata used to decide
//! whether it is still fresh.

use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

use super::StatsSnapshot;

// == Cache Entry ==
/// A computed snapshot together with when it was computed and the source
/// modification time it was computed against.
///
/// Entries are replaced wholesale on every recomputation.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The computed statistics
    pub data: StatsSnapshot,
    /// When the statistics were computed
    pub calculated_at: DateTime<Utc>,
    /// Source modification time recorded at fill, None if it could not be read
    pub source_modified: Option<SystemTime>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(data: StatsSnapshot, source_modified: Option<SystemTime>) -> Self {
        Self {
            data,
            calculated_at: Utc::now(),
            source_modified,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was computed.
    pub fn age(&self) -> Duration {
        (Utc::now() - self.calculated_at)
            .to_std()
            .unwrap_or_default()
    }

    /// Age in whole seconds, rounded to nearest.
    pub fn age_secs(&self) -> u64 {
        (self.age().as_millis() as f64 / 1000.0).round() as u64
    }

    // == Is Expired ==
    /// An entry is expired once its age strictly exceeds the TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    // == Source Check ==
    /// Whether `current` differs from the modification time recorded at fill.
    pub fn source_changed(&self, current: SystemTime) -> bool {
        self.source_modified != Some(current)
    }
}
