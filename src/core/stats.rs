use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::{PriceHistoryPoint, PriceObservations};

/// Descriptive statistics over the valid prices of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean of all valid prices.
    pub average: f64,
    pub median: f64,
    /// Number of prices that passed the validity filter.
    pub count: usize,
    /// `max - min`.
    pub range: f64,
    /// `range / max * 100`, or `0` when `max` is not positive.
    pub range_percentage: f64,
}

impl MarketStats {
    /// Aggregates the valid prices among `values`.
    ///
    /// Values that are not finite or not strictly positive are skipped.
    /// Returns `None` when nothing valid remains.
    #[must_use]
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted: Vec<OrderedFloat<f64>> = values
            .into_iter()
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(OrderedFloat)
            .collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();

        let count = sorted.len();
        let min = sorted[0].0;
        let max = sorted[count - 1].0;
        // Incremental mean and offset midpoint stay finite near f64::MAX.
        let average = sorted
            .iter()
            .enumerate()
            .fold(0.0, |mean, (index, value)| {
                mean + (value.0 - mean) / (index + 1) as f64
            });
        let mid = count / 2;
        let median = if count % 2 == 0 {
            let (low, high) = (sorted[mid - 1].0, sorted[mid].0);
            low + (high - low) / 2.0
        } else {
            sorted[mid].0
        };
        let range = max - min;
        let range_percentage = if max > 0.0 { range / max * 100.0 } else { 0.0 };

        Some(Self {
            min,
            max,
            average,
            median,
            count,
            range,
            range_percentage,
        })
    }
}

/// Computes statistics over a source/month keyed observation map.
///
/// Keys are ignored. Entries whose value is missing, unparseable, zero or
/// negative are excluded; `None` signals that no market data remains.
#[must_use]
pub fn compute_stats(observations: &PriceObservations) -> Option<MarketStats> {
    let stats = MarketStats::from_values(
        observations
            .values()
            .filter_map(|value| value.positive_price()),
    );
    trace!(
        observations = observations.len(),
        valid = stats.map_or(0, |stats| stats.count),
        "computed price stats"
    );
    stats
}

/// Computes statistics over the prices of a monthly history.
///
/// Applies the same validity rules as [`compute_stats`]; order is irrelevant.
#[must_use]
pub fn compute_history_stats(history: &[PriceHistoryPoint]) -> Option<MarketStats> {
    let stats = MarketStats::from_values(
        history
            .iter()
            .filter_map(|point| point.price.positive_price()),
    );
    trace!(
        points = history.len(),
        valid = stats.map_or(0, |stats| stats.count),
        "computed history stats"
    );
    stats
}

/// Returns `(min, max)` of `values`, or `(0, 0)` for an empty slice.
///
/// Unlike [`MarketStats`], nothing is filtered out.
#[must_use]
pub fn value_extrema(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(*value), max.max(*value))
        })
}
