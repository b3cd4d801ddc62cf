pub mod chart_layout;
pub mod primitives;
pub mod series_projection;
pub mod stats;
pub mod types;
pub mod value_axis;
pub mod windowing;

pub use chart_layout::ChartLayout;
pub use series_projection::{
    ChartVertex, SeriesAnnotation, SeriesProjection, annotation_indices, project_series,
    project_series_with_layout, running_average,
};
pub use stats::{MarketStats, compute_history_stats, compute_stats, value_extrema};
pub use types::{PriceHistoryPoint, PriceObservations, PriceValue, ResellBounds};
pub use value_axis::{ValueAxis, ValueDomain, ValueTick};
pub use windowing::recent_history_window;
