use approx::assert_relative_eq;
use market_price_stats::core::{
    MarketStats, PriceHistoryPoint, PriceObservations, PriceValue, compute_history_stats,
    compute_stats, value_extrema,
};
use rust_decimal::Decimal;

fn observations(entries: &[(&str, PriceValue)]) -> PriceObservations {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

#[test]
fn empty_observations_have_no_market_data() {
    assert_eq!(compute_stats(&PriceObservations::new()), None);
}

#[test]
fn invalid_only_observations_have_no_market_data() {
    let input = observations(&[
        ("a", PriceValue::from("not-a-number")),
        ("b", PriceValue::from(-5.0)),
        ("c", PriceValue::from(0.0)),
        ("d", PriceValue::Missing),
    ]);

    assert_eq!(compute_stats(&input), None);
}

#[test]
fn odd_sized_set_reports_all_fields() {
    let input = observations(&[
        ("a", PriceValue::from(10.0)),
        ("b", PriceValue::from(20.0)),
        ("c", PriceValue::from(30.0)),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
    assert_eq!(stats.average, 20.0);
    assert_eq!(stats.median, 20.0);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.range, 20.0);
    assert_relative_eq!(stats.range_percentage, 200.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn even_sized_set_uses_mean_of_middle_values() {
    let input = observations(&[("a", PriceValue::from(10.0)), ("b", PriceValue::from(20.0))]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.median, 15.0);
}

#[test]
fn median_ignores_insertion_order() {
    let input = observations(&[
        ("ebay", PriceValue::from(400.0)),
        ("reverb", PriceValue::from(100.0)),
        ("craigslist", PriceValue::from(300.0)),
        ("local", PriceValue::from(200.0)),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.median, 250.0);
    assert_eq!(stats.average, 250.0);
}

#[test]
fn invalid_entries_are_excluded_from_count() {
    let input = observations(&[
        ("ebay", PriceValue::from(" 120.5 ")),
        ("reverb", PriceValue::from("n/a")),
        ("local", PriceValue::from(0.0)),
        ("shop", PriceValue::from(79.5)),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.min, 79.5);
    assert_eq!(stats.max, 120.5);
    assert_eq!(stats.average, 100.0);
}

#[test]
fn huge_prices_do_not_overflow_average_or_median() {
    let input = observations(&[
        ("a", PriceValue::from(1e308)),
        ("b", PriceValue::from(1.5e308)),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.max, 1.5e308);
    assert!(stats.average.is_finite());
    assert!(stats.median.is_finite());
    assert_relative_eq!(stats.average, 1.25e308, max_relative = 1e-12);
    assert_relative_eq!(stats.median, 1.25e308, max_relative = 1e-12);
    assert!(stats.average <= stats.max && stats.median <= stats.max);
}

#[test]
fn non_finite_values_are_excluded() {
    let input = observations(&[
        ("a", PriceValue::from("inf")),
        ("b", PriceValue::from(f64::NAN)),
        ("c", PriceValue::from(42.0)),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_eq!(stats.count, 1);
    assert_eq!(stats.range, 0.0);
    assert_eq!(stats.range_percentage, 0.0);
}

#[test]
fn decimal_prices_are_accepted() {
    let input = observations(&[
        ("a", PriceValue::from(Decimal::new(1999, 2))),
        ("b", PriceValue::from(Decimal::new(2001, 2))),
    ]);

    let stats = compute_stats(&input).expect("market data");
    assert_relative_eq!(stats.average, 20.0, epsilon = 1e-9);
}

#[test]
fn computation_leaves_input_untouched_and_is_repeatable() {
    let input = observations(&[
        ("z", PriceValue::from(3.0)),
        ("a", PriceValue::from("1")),
        ("m", PriceValue::from(2.0)),
    ]);
    let before = input.clone();

    let first = compute_stats(&input);
    let second = compute_stats(&before.clone());

    assert_eq!(input, before);
    assert_eq!(
        input.keys().collect::<Vec<_>>(),
        vec!["z", "a", "m"],
        "insertion order is preserved"
    );
    assert_eq!(first, second);
}

#[test]
fn history_stats_share_the_validity_rules() {
    let history = vec![
        PriceHistoryPoint::new("2024-03", 30.0),
        PriceHistoryPoint::new("2024-01", "10"),
        PriceHistoryPoint::new("2024-02", 0.0),
        PriceHistoryPoint::new("2024-04", PriceValue::Missing),
    ];

    let stats = compute_history_stats(&history).expect("market data");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.median, 20.0);
    assert_eq!(compute_history_stats(&[]), None);
}

#[test]
fn from_values_filters_like_observations() {
    assert_eq!(MarketStats::from_values([0.0, -1.0, f64::NAN]), None);

    let stats = MarketStats::from_values([5.0, -1.0, 15.0]).expect("market data");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.median, 10.0);
}

#[test]
fn extrema_keep_every_value() {
    assert_eq!(value_extrema(&[]), (0.0, 0.0));
    assert_eq!(value_extrema(&[3.0, -2.0, 0.0]), (-2.0, 3.0));
}
