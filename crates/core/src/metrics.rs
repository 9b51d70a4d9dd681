//! Prometheus metrics for catalog loading.

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts};

/// Catalog loads by hub and outcome.
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("moviehub_catalog_loads_total", "Total catalog loads"),
        &["hub", "outcome"], // "fetched", "fallback", "failed"
    )
    .unwrap()
});

/// Time spent fetching and parsing a catalog.
pub static CATALOG_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "moviehub_catalog_fetch_duration_seconds",
            "Duration of catalog fetch and parse",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["hub"],
    )
    .unwrap()
});

/// Records held in each cached catalog.
pub static CATALOG_RECORDS: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("moviehub_catalog_records", "Records in the cached catalog"),
        &["hub"],
    )
    .unwrap()
});

/// Get all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(CATALOG_FETCH_DURATION.clone()),
        Box::new(CATALOG_RECORDS.clone()),
    ]
}
