use crate::core::types::PriceHistoryPoint;

/// Returns the newest `max_points` entries of `history` in ascending month order.
///
/// Months are compared as strings, which orders zero-padded `YYYY-MM` keys
/// chronologically. Entries with equal keys keep their input order. The
/// input slice is left untouched.
#[must_use]
pub fn recent_history_window(
    history: &[PriceHistoryPoint],
    max_points: usize,
) -> Vec<PriceHistoryPoint> {
    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| a.month.cmp(&b.month));
    let skip = sorted.len().saturating_sub(max_points);
    sorted.split_off(skip)
}
