use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::types::PriceValue;
use crate::error::{MarketError, MarketResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> MarketResult<f64> {
    value.to_f64().ok_or_else(|| {
        MarketError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Coerces a raw value into a number without any validity policy.
///
/// Text is trimmed before parsing. Returns `None` for missing values, text
/// that does not parse, and non-finite numbers.
#[must_use]
pub fn price_to_f64(value: &PriceValue) -> Option<f64> {
    let number = match value {
        PriceValue::Number(number) => *number,
        PriceValue::Text(text) => text.trim().parse::<f64>().ok()?,
        PriceValue::Missing => return None,
    };
    number.is_finite().then_some(number)
}

/// Coerces a raw value into a usable market price (finite and `> 0`).
#[must_use]
pub fn parse_positive_price(value: &PriceValue) -> Option<f64> {
    price_to_f64(value).filter(|price| *price > 0.0)
}

/// Coerces a raw value for display, keeping zero and negative numbers.
#[must_use]
pub fn price_or_zero(value: &PriceValue) -> f64 {
    price_to_f64(value).unwrap_or(0.0)
}

#[must_use]
pub fn format_month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Axis label for a `YYYY-MM` key: everything after the `YYYY-` prefix.
#[must_use]
pub fn month_label(month: &str) -> String {
    month.chars().skip(5).collect()
}
