//! Telemetry helpers for applications embedding `market-price-stats`.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host unless it opts into `init_default_tracing`.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "warn,market_price_stats=debug";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Without `RUST_LOG`, events from this crate are shown at `debug` and
/// everything else at `warn`, so per-call projection summaries are visible.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or the host application has
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
