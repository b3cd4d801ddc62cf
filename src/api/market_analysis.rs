use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::core::series_projection::project_validated;
use crate::core::{
    ChartLayout, MarketStats, PriceHistoryPoint, PriceObservations, PriceValue, ResellBounds,
    SeriesProjection, compute_history_stats, compute_stats,
};
use crate::error::MarketResult;

/// Market data block of an upstream listing analysis payload.
///
/// Every field is optional and unknown fields are ignored, so the block can
/// be lifted straight out of a larger response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketAnalysisInput {
    /// Display currency, passed through untouched.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, alias = "prices", deserialize_with = "null_as_default")]
    pub prices_by_source: PriceObservations,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_history: Vec<PriceHistoryPoint>,
    #[serde(default)]
    pub min_reselling_price: PriceValue,
    #[serde(default)]
    pub max_reselling_price: PriceValue,
}

impl MarketAnalysisInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Adds or replaces the observation for `source`.
    #[must_use]
    pub fn with_price(mut self, source: impl Into<String>, price: impl Into<PriceValue>) -> Self {
        self.prices_by_source.insert(source.into(), price.into());
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: Vec<PriceHistoryPoint>) -> Self {
        self.price_history = history;
        self
    }

    #[must_use]
    pub fn with_reselling_range(
        mut self,
        min_reselling_price: impl Into<PriceValue>,
        max_reselling_price: impl Into<PriceValue>,
    ) -> Self {
        self.min_reselling_price = min_reselling_price.into();
        self.max_reselling_price = max_reselling_price.into();
        self
    }
}

/// Statistics and chart projection for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub currency: Option<String>,
    /// Statistics over per-source observations; `None` means no market data.
    pub stats: Option<MarketStats>,
    /// Statistics over the monthly history prices.
    pub history_stats: Option<MarketStats>,
    pub series: SeriesProjection,
}

impl MarketAnalysis {
    #[must_use]
    pub fn has_market_data(&self) -> bool {
        self.stats.is_some()
    }
}

/// Turns upstream market payloads into [`MarketAnalysis`] values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketAnalyzer {
    layout: ChartLayout,
}

impl MarketAnalyzer {
    pub fn new(layout: ChartLayout) -> MarketResult<Self> {
        Ok(Self {
            layout: layout.validate()?,
        })
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Computes statistics and the chart projection for `input`.
    ///
    /// Chart reference bounds come from the explicit reselling prices when
    /// they are valid, then from the per-source statistics, and finally from
    /// the history itself.
    #[must_use]
    pub fn analyze(&self, input: &MarketAnalysisInput) -> MarketAnalysis {
        let stats = compute_stats(&input.prices_by_source);
        let history_stats = compute_history_stats(&input.price_history);
        let bounds = ResellBounds {
            min_resell: input
                .min_reselling_price
                .positive_price()
                .or_else(|| stats.map(|stats| stats.min)),
            max_resell: input
                .max_reselling_price
                .positive_price()
                .or_else(|| stats.map(|stats| stats.max)),
        };
        let series = project_validated(&input.price_history, bounds, self.layout);

        debug!(
            sources = input.prices_by_source.len(),
            valid_sources = stats.map_or(0, |stats| stats.count),
            history_points = series.len(),
            "analyzed market data"
        );

        MarketAnalysis {
            currency: input.currency.clone(),
            stats,
            history_stats,
            series,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
