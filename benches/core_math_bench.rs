use criterion::{Criterion, criterion_group, criterion_main};
use market_price_stats::core::{
    PriceHistoryPoint, PriceObservations, PriceValue, ResellBounds, compute_stats, project_series,
};
use market_price_stats::{MarketAnalysisInput, MarketAnalyzer};
use std::hint::black_box;

fn bench_compute_stats_10k(c: &mut Criterion) {
    let observations: PriceObservations = (0..10_000)
        .map(|i| {
            let price = 100.0 + (i % 977) as f64 * 0.5;
            let value = if i % 10 == 0 {
                PriceValue::from(format!("{price:.2}"))
            } else {
                PriceValue::from(price)
            };
            (format!("source-{i}"), value)
        })
        .collect();

    c.bench_function("compute_stats_10k", |b| {
        b.iter(|| {
            let _ = compute_stats(black_box(&observations));
        })
    });
}

fn bench_project_series_120_months(c: &mut Criterion) {
    let history: Vec<PriceHistoryPoint> = (0..120)
        .rev()
        .map(|i| {
            let month = format!("{:04}-{:02}", 2010 + i / 12, i % 12 + 1);
            PriceHistoryPoint::new(month, 400.0 + (i as f64 * 0.7).sin() * 50.0)
        })
        .collect();

    c.bench_function("project_series_120_months", |b| {
        b.iter(|| {
            let projection = project_series(black_box(&history), ResellBounds::new(350.0, 480.0));
            let _ = black_box(projection.price_points());
        })
    });
}

fn bench_analysis_json_contract(c: &mut Criterion) {
    let mut input = MarketAnalysisInput::new().with_currency("EUR");
    for i in 0..50 {
        input = input.with_price(format!("source-{i}"), 90.0 + f64::from(i));
    }
    input = input.with_history(
        (1..=12)
            .map(|m| PriceHistoryPoint::new(format!("2024-{m:02}"), 100.0 + f64::from(m)))
            .collect(),
    );
    let analyzer = MarketAnalyzer::default();

    c.bench_function("analysis_json_contract", |b| {
        b.iter(|| {
            let analysis = analyzer.analyze(black_box(&input));
            let _ = analysis
                .to_json_contract_v1_pretty()
                .expect("contract json should serialize");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_stats_10k,
    bench_project_series_120_months,
    bench_analysis_json_contract
);
criterion_main!(benches);
