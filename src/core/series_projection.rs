use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::chart_layout::ChartLayout;
use crate::core::primitives::month_label;
use crate::core::stats::value_extrema;
use crate::core::types::{PriceHistoryPoint, ResellBounds};
use crate::core::value_axis::{ValueAxis, ValueDomain, ValueTick};
use crate::core::windowing::recent_history_window;
use crate::error::MarketResult;

/// Pixel-space vertex of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartVertex {
    pub x: f64,
    pub y: f64,
}

/// Percent-change callout attached to an interior point of the price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnnotation {
    pub index: usize,
    pub label: String,
    pub price: f64,
    pub x: f64,
    pub y: f64,
    /// Change versus the previous point, in percent. `None` when the
    /// previous price is zero.
    pub change_percent: Option<f64>,
}

/// Chart-ready view of a monthly price history.
///
/// Every series has one entry per retained month, in ascending month order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesProjection {
    pub prices: Vec<f64>,
    /// Month part (`MM`) of each retained `YYYY-MM` key.
    pub labels: Vec<String>,
    /// Cumulative mean of `prices` up to and including each index.
    pub average_series: Vec<f64>,
    /// Flat reference line at `max_resell`.
    pub max_series: Vec<f64>,
    pub min_all: f64,
    pub max_all: f64,
    pub min_resell: f64,
    pub max_resell: f64,
    /// Midpoint of `min_resell` and `max_resell`.
    ///
    /// This is not the mean of `prices`; see `MarketStats::average` for that.
    pub bounds_midpoint: f64,
    pub axis: ValueAxis,
    pub annotation_indices: SmallVec<[usize; 3]>,
}

impl SeriesProjection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Padded value range of the vertical axis.
    #[must_use]
    pub fn domain(&self) -> ValueDomain {
        self.axis.domain()
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.axis.value_to_y(value)
    }

    #[must_use]
    pub fn index_to_x(&self, index: usize) -> f64 {
        self.axis.index_to_x(index)
    }

    #[must_use]
    pub fn price_points(&self) -> Vec<ChartVertex> {
        self.vertices(&self.prices)
    }

    #[must_use]
    pub fn average_points(&self) -> Vec<ChartVertex> {
        self.vertices(&self.average_series)
    }

    #[must_use]
    pub fn max_points(&self) -> Vec<ChartVertex> {
        self.vertices(&self.max_series)
    }

    #[must_use]
    pub fn value_ticks(&self) -> Vec<ValueTick> {
        self.axis.ticks()
    }

    /// Callouts for every index in `annotation_indices`.
    ///
    /// Indices without a preceding point or outside the series are skipped,
    /// which only happens for projections deserialized from foreign JSON.
    #[must_use]
    pub fn annotations(&self) -> Vec<SeriesAnnotation> {
        self.annotation_indices
            .iter()
            .filter_map(|&index| {
                let price = *self.prices.get(index)?;
                let previous = *self.prices.get(index.checked_sub(1)?)?;
                let change_percent =
                    (previous != 0.0).then(|| (price - previous) / previous.abs() * 100.0);
                Some(SeriesAnnotation {
                    index,
                    label: self.labels.get(index).cloned().unwrap_or_default(),
                    price,
                    x: self.index_to_x(index),
                    y: self.value_to_y(price),
                    change_percent,
                })
            })
            .collect()
    }

    fn vertices(&self, values: &[f64]) -> Vec<ChartVertex> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| ChartVertex {
                x: self.index_to_x(index),
                y: self.value_to_y(*value),
            })
            .collect()
    }
}

/// Projects a price history onto the default chart layout.
///
/// Never fails: empty or degenerate histories produce empty series and a
/// centred vertical mapping.
#[must_use]
pub fn project_series(history: &[PriceHistoryPoint], bounds: ResellBounds) -> SeriesProjection {
    project_validated(history, bounds, ChartLayout::default())
}

/// Projects a price history onto a caller supplied layout.
///
/// Only the layout is validated; history data never produces an error.
pub fn project_series_with_layout(
    history: &[PriceHistoryPoint],
    bounds: ResellBounds,
    layout: &ChartLayout,
) -> MarketResult<SeriesProjection> {
    let layout = layout.validate()?;
    Ok(project_validated(history, bounds, layout))
}

/// Interior indices that receive a percent-change callout.
///
/// The first and last points are never selected.
#[must_use]
pub fn annotation_indices(len: usize) -> SmallVec<[usize; 3]> {
    let mut indices: SmallVec<[usize; 3]> = match len {
        0..=2 => SmallVec::new(),
        3 | 4 => SmallVec::from_slice(&[1, len - 2]),
        _ => SmallVec::from_slice(&[1, len / 2, len - 2]),
    };
    indices.dedup();
    indices
}

/// Cumulative mean: `out[i] = mean(values[0..=i])`.
#[must_use]
pub fn running_average(values: &[f64]) -> Vec<f64> {
    let mut mean = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let count = (index + 1) as f64;
            let delta = value - mean;
            // Incremental update; the split form covers opposite-sign extremes.
            mean = if delta.is_finite() {
                mean + delta / count
            } else {
                mean + value / count - mean / count
            };
            mean
        })
        .collect()
}

pub(crate) fn project_validated(
    history: &[PriceHistoryPoint],
    bounds: ResellBounds,
    layout: ChartLayout,
) -> SeriesProjection {
    let window = recent_history_window(history, layout.max_history_points);
    let prices: Vec<f64> = window
        .iter()
        .map(|point| point.price.numeric_or_zero())
        .collect();
    let labels: Vec<String> = window
        .iter()
        .map(|point| month_label(&point.month))
        .collect();

    let (min_all, max_all) = value_extrema(&prices);
    let min_resell = finite_bound(bounds.min_resell, "min_resell").unwrap_or(min_all);
    let max_resell = finite_bound(bounds.max_resell, "max_resell").unwrap_or(max_all);
    let bounds_midpoint = min_resell / 2.0 + max_resell / 2.0;

    let average_series = running_average(&prices);
    let max_series = vec![max_resell; prices.len()];
    let domain = ValueDomain::padded(min_all, max_all, min_resell, max_resell);
    let axis = ValueAxis::new(layout, domain, prices.len());
    let annotation_indices = annotation_indices(prices.len());

    debug!(
        input_points = history.len(),
        retained_points = prices.len(),
        domain_min = domain.min,
        domain_max = domain.max,
        "projected price series"
    );

    SeriesProjection {
        prices,
        labels,
        average_series,
        max_series,
        min_all,
        max_all,
        min_resell,
        max_resell,
        bounds_midpoint,
        axis,
        annotation_indices,
    }
}

fn finite_bound(bound: Option<f64>, name: &str) -> Option<f64> {
    match bound {
        Some(value) if !value.is_finite() => {
            warn!(bound = name, value, "ignoring non-finite reference bound");
            None
        }
        other => other,
    }
}
