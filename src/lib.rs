//! market-price-stats: market price statistics for resale listings.
//!
//! `core` holds the pure computations: descriptive statistics over price
//! observations and the chart projection of a monthly price history. `api`
//! wraps both behind a facade that consumes upstream payloads and emits a
//! versioned JSON contract for presentation layers.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{MarketAnalysis, MarketAnalysisInput, MarketAnalyzer};
pub use error::{MarketError, MarketResult};
