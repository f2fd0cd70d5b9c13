//! Observability utilities for the products API.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Metrics for record store calls and product validation
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, StoreMetrics};
//!
//! init_metrics()?;
//!
//! StoreMetrics::record_call("list", "success", 0.120);
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod store;
pub mod validation;

pub use middleware::metrics_middleware;
pub use store::StoreMetrics;
pub use validation::ValidationMetrics;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at application startup; later calls return the existing handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Record store metrics
    describe_counter!(
        "record_store_calls_total",
        "Record store calls by operation and outcome"
    );
    describe_histogram!(
        "record_store_call_duration_seconds",
        "Record store call duration in seconds"
    );
    describe_counter!(
        "record_store_records_listed_total",
        "Records returned by list calls"
    );

    // Validation metrics
    describe_counter!(
        "product_validations_total",
        "Product validations by outcome"
    );
    describe_counter!(
        "product_validation_errors_total",
        "Individual validation errors reported to clients"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_handler_renders_after_init() {
        let handle = init_metrics().expect("recorder installs once per process");
        let again = init_metrics().unwrap();
        assert!(std::ptr::eq(handle, again));

        StoreMetrics::record_call("get", "success", 0.01);
        let rendered = metrics_handler().await;
        assert!(rendered.contains("record_store_calls_total"));
    }
}
