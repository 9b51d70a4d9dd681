//! Prometheus metrics for observability.
//!
//! HTTP request metrics live here; catalog load metrics come from
//! `moviehub_core::metrics` and share the same registry.

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "moviehub_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("moviehub_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "moviehub_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Catalog loads
    for metric in moviehub_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

static MOVIE_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/api/v1/hubs/[^/]+/movies)/[^/]+/?$").unwrap());

/// Normalize a path for metric labels (replace movie names with a placeholder).
///
/// Hub slugs are a fixed set and stay as they are.
pub fn normalize_path(path: &str) -> String {
    MOVIE_DETAIL.replace(path, "$1/{name}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_movie_name() {
        let path = "/api/v1/hubs/rocky/movies/Rocky%20Balboa";
        assert_eq!(normalize_path(path), "/api/v1/hubs/rocky/movies/{name}");
    }

    #[test]
    fn test_normalize_path_keeps_hub_routes() {
        for path in [
            "/api/v1/hubs/rocky/movies",
            "/api/v1/hubs/star-wars/sections",
            "/api/v1/hubs",
            "/api/v1/health",
        ] {
            assert_eq!(normalize_path(path), path);
        }
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("moviehub_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_catalog_metrics() {
        HTTP_REQUEST_DURATION
            .with_label_values(&["GET", "/test", "200"])
            .observe(0.1);
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        moviehub_core::metrics::CATALOG_LOADS
            .with_label_values(&["rocky", "fetched"])
            .inc();
        moviehub_core::metrics::CATALOG_RECORDS
            .with_label_values(&["rocky"])
            .set(6);

        let output = encode_metrics();

        assert!(output.contains("moviehub_http_request_duration_seconds"));
        assert!(output.contains("moviehub_http_requests_in_flight"));
        assert!(output.contains("moviehub_catalog_loads_total"));
        assert!(output.contains("moviehub_catalog_records"));
    }
}
