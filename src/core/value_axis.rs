use serde::{Deserialize, Serialize};

use crate::core::chart_layout::ChartLayout;

/// Bottom padding ratio applied to the lowest reference value.
pub const DOMAIN_LOWER_FACTOR: f64 = 0.95;
/// Top padding ratio applied to the highest reference value.
pub const DOMAIN_UPPER_FACTOR: f64 = 1.05;

/// Numeric value range shown on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Builds the padded domain covering both the series and the reference bounds.
    ///
    /// Lines never touch the chart edges: the lower end is scaled by `0.95`
    /// and the upper end by `1.05`. Both ends are clamped to finite values.
    #[must_use]
    pub fn padded(min_all: f64, max_all: f64, min_resell: f64, max_resell: f64) -> Self {
        Self {
            min: (min_all.min(min_resell) * DOMAIN_LOWER_FACTOR).clamp(f64::MIN, f64::MAX),
            max: (max_all.max(max_resell) * DOMAIN_UPPER_FACTOR).clamp(f64::MIN, f64::MAX),
        }
    }

    /// Position of `value` inside the domain, `0` at `min` and `1` at `max`.
    ///
    /// Works on halved operands so domains wider than `f64::MAX` stay finite.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }

    /// Value at fraction `t` of the domain; inverse of [`Self::normalize`].
    #[must_use]
    pub fn interpolate(self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }

    /// `true` when every value maps to the same position.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }
}

/// Value tick on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
}

/// Maps data values and point indices into the drawable band of a [`ChartLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    layout: ChartLayout,
    domain: ValueDomain,
    point_count: usize,
}

impl ValueAxis {
    #[must_use]
    pub fn new(layout: ChartLayout, domain: ValueDomain, point_count: usize) -> Self {
        Self {
            layout,
            domain,
            point_count,
        }
    }

    #[must_use]
    pub fn layout(self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn point_count(self) -> usize {
        self.point_count
    }

    /// Vertical pixel for `value`; larger values sit higher (smaller y).
    ///
    /// A degenerate domain places everything on the vertical centre of the
    /// drawable band.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let top = self.layout.padding_top;
        let height = self.layout.drawable_height();
        if self.domain.is_degenerate() {
            return top + height / 2.0;
        }
        top + (1.0 - self.domain.normalize(value)) * height
    }

    /// Horizontal distance between two adjacent points.
    #[must_use]
    pub fn step_x(self) -> f64 {
        if self.point_count > 1 {
            self.layout.drawable_width() / (self.point_count - 1) as f64
        } else {
            0.0
        }
    }

    /// Horizontal pixel for the point at `index`, evenly spaced from the left padding.
    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        self.layout.padding_left + index as f64 * self.step_x()
    }

    /// Evenly spaced ticks from the domain minimum (bottom) to maximum (top).
    ///
    /// A degenerate domain or a single configured tick yields one centred tick.
    #[must_use]
    pub fn ticks(self) -> Vec<ValueTick> {
        let tick_count = self.layout.tick_count;
        if tick_count <= 1 || self.domain.is_degenerate() {
            let value = self.domain.interpolate(0.5);
            return vec![ValueTick {
                value,
                y: self.value_to_y(value),
            }];
        }

        let last = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|i| {
                let value = self.domain.interpolate(i as f64 / last);
                ValueTick {
                    value,
                    y: self.value_to_y(value),
                }
            })
            .collect()
    }
}
