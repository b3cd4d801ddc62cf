use thiserror::Error;

pub type MarketResult<T> = Result<T, MarketError>;

/// Failures the crate can report.
///
/// Irregular price data is never an error: invalid observations are dropped
/// and an empty dataset surfaces as `None` from the statistics functions.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("invalid chart layout: {0}")]
    InvalidLayout(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
