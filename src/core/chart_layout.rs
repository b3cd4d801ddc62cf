use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

/// Logical canvas used to place the price history chart.
///
/// All lengths are logical pixels. Defaults match the mobile price chart:
/// a 700x360 canvas with 60/20/30/56 left/right/top/bottom padding, five
/// value ticks and a twelve month window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding_left")]
    pub padding_left: f64,
    #[serde(default = "default_padding_right")]
    pub padding_right: f64,
    #[serde(default = "default_padding_top")]
    pub padding_top: f64,
    #[serde(default = "default_padding_bottom")]
    pub padding_bottom: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_max_history_points")]
    pub max_history_points: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding_left: default_padding_left(),
            padding_right: default_padding_right(),
            padding_top: default_padding_top(),
            padding_bottom: default_padding_bottom(),
            tick_count: default_tick_count(),
            max_history_points: default_max_history_points(),
        }
    }
}

impl ChartLayout {
    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets left/right/top/bottom padding.
    #[must_use]
    pub fn with_padding(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets how many of the most recent history points are kept.
    #[must_use]
    pub fn with_max_history_points(mut self, max_history_points: usize) -> Self {
        self.max_history_points = max_history_points;
        self
    }

    /// Parses a layout from JSON, filling omitted fields with defaults.
    pub fn from_json_str(input: &str) -> MarketResult<Self> {
        let layout: Self = serde_json::from_str(input).map_err(|e| {
            MarketError::InvalidLayout(format!("failed to parse chart layout json: {e}"))
        })?;
        layout.validate()
    }

    #[must_use]
    pub fn drawable_width(self) -> f64 {
        self.width - self.padding_left - self.padding_right
    }

    #[must_use]
    pub fn drawable_height(self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    pub fn validate(self) -> MarketResult<Self> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(MarketError::InvalidLayout(
                "canvas size must be finite".to_owned(),
            ));
        }
        for (value, name) in [
            (self.padding_left, "padding_left"),
            (self.padding_right, "padding_right"),
            (self.padding_top, "padding_top"),
            (self.padding_bottom, "padding_bottom"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MarketError::InvalidLayout(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0 {
            return Err(MarketError::InvalidLayout(format!(
                "drawable area must be positive, got {}x{}",
                self.drawable_width(),
                self.drawable_height()
            )));
        }
        if self.tick_count == 0 {
            return Err(MarketError::InvalidLayout(
                "tick_count must be >= 1".to_owned(),
            ));
        }
        if self.max_history_points == 0 {
            return Err(MarketError::InvalidLayout(
                "max_history_points must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_width() -> f64 {
    700.0
}

fn default_height() -> f64 {
    360.0
}

fn default_padding_left() -> f64 {
    60.0
}

fn default_padding_right() -> f64 {
    20.0
}

fn default_padding_top() -> f64 {
    30.0
}

fn default_padding_bottom() -> f64 {
    56.0
}

fn default_tick_count() -> usize {
    5
}

fn default_max_history_points() -> usize {
    12
}
