use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, format_month_key, parse_positive_price, price_or_zero};

/// Raw price value as delivered by an upstream pricing payload.
///
/// Upstream services mix numbers and numeric strings, and sometimes send
/// `null`. Nothing is validated on construction; consumers decide how to
/// coerce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl PriceValue {
    /// Returns the value when it is a finite price strictly greater than zero.
    #[must_use]
    pub fn positive_price(&self) -> Option<f64> {
        parse_positive_price(self)
    }

    /// Returns the numeric value, falling back to `0.0` for anything unparseable.
    #[must_use]
    pub fn numeric_or_zero(&self) -> f64 {
        price_or_zero(self)
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PriceValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PriceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<f64>> for PriceValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl From<Decimal> for PriceValue {
    fn from(value: Decimal) -> Self {
        // Decimals outside f64 range are kept as text so they are dropped by
        // the same rules as any other unparseable value.
        match decimal_to_f64(value, "price") {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

/// Price observations keyed by source platform or month label.
///
/// Keys carry no meaning for the statistics; insertion order is preserved so
/// serialized payloads stay stable.
pub type PriceObservations = IndexMap<String, PriceValue>;

/// Single monthly entry of a price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceHistoryPoint {
    /// Month key in `YYYY-MM` form.
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub price: PriceValue,
}

impl PriceHistoryPoint {
    #[must_use]
    pub fn new(month: impl Into<String>, price: impl Into<PriceValue>) -> Self {
        Self {
            month: month.into(),
            price: price.into(),
        }
    }

    /// Builds a point keyed by the calendar month containing `date`.
    #[must_use]
    pub fn from_month(date: NaiveDate, price: impl Into<PriceValue>) -> Self {
        Self::new(format_month_key(date), price)
    }
}

/// Optional known reselling bounds used as chart reference values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ResellBounds {
    #[serde(default)]
    pub min_resell: Option<f64>,
    #[serde(default)]
    pub max_resell: Option<f64>,
}

impl ResellBounds {
    #[must_use]
    pub fn new(min_resell: f64, max_resell: f64) -> Self {
        Self {
            min_resell: Some(min_resell),
            max_resell: Some(max_resell),
        }
    }

    #[must_use]
    pub fn with_min_resell(mut self, min_resell: f64) -> Self {
        self.min_resell = Some(min_resell);
        self
    }

    #[must_use]
    pub fn with_max_resell(mut self, max_resell: f64) -> Self {
        self.max_resell = Some(max_resell);
        self
    }
}
