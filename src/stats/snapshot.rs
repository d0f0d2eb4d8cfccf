//! Price statistics over the item collection.

use serde::Serialize;

use crate::models::Item;

/// Message reported when the collection is empty.
pub const NO_ITEMS_MESSAGE: &str = "No items found";
/// Message reported when no item carries a finite price.
pub const NO_PRICE_DATA_MESSAGE: &str = "No valid price data found";

// == Stats Snapshot ==
/// Aggregate statistics, either a full price summary or a degenerate form
/// carrying only a count and an explanatory message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatsSnapshot {
    Summary(PriceSummary),
    Unavailable(UnavailableStats),
}

/// Statistics over the valid-priced items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    /// Count of all items, including those without a valid price
    pub total: usize,
    pub total_with_valid_prices: usize,
    /// Mean valid price, rounded to 2 decimals
    pub average_price: f64,
    /// Sum of valid prices, rounded to 2 decimals
    pub total_value: f64,
    pub price_range: PriceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Degenerate statistics when there is nothing to average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableStats {
    pub total: usize,
    pub average_price: f64,
    pub message: String,
}

impl StatsSnapshot {
    fn unavailable(total: usize, message: &str) -> Self {
        StatsSnapshot::Unavailable(UnavailableStats {
            total,
            average_price: 0.0,
            message: message.to_string(),
        })
    }

    /// Count of all items the snapshot was computed over.
    pub fn total(&self) -> usize {
        match self {
            StatsSnapshot::Summary(summary) => summary.total,
            StatsSnapshot::Unavailable(stats) => stats.total,
        }
    }

    pub fn average_price(&self) -> f64 {
        match self {
            StatsSnapshot::Summary(summary) => summary.average_price,
            StatsSnapshot::Unavailable(stats) => stats.average_price,
        }
    }
}

// == Computation ==
/// Computes statistics over the full item sequence.
pub fn compute_stats(items: &[Item]) -> StatsSnapshot {
    if items.is_empty() {
        return StatsSnapshot::unavailable(0, NO_ITEMS_MESSAGE);
    }

    let prices: Vec<f64> = items.iter().filter_map(Item::valid_price).collect();
    if prices.is_empty() {
        return StatsSnapshot::unavailable(items.len(), NO_PRICE_DATA_MESSAGE);
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    StatsSnapshot::Summary(PriceSummary {
        total: items.len(),
        total_with_valid_prices: prices.len(),
        average_price: round_cents(sum / prices.len() as f64),
        total_value: round_cents(sum),
        price_range: PriceRange { min, max },
    })
}

/// Rounds half-up (toward positive infinity) to 2 decimal places.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 100.0
}
