//! Record store call metrics.

use metrics::{counter, histogram};

/// Record store metrics recorder
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one call to the record store.
    ///
    /// `outcome` is a short label such as "success", "not_found" or "error".
    pub fn record_call(operation: &'static str, outcome: &'static str, duration_secs: f64) {
        counter!(
            "record_store_calls_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
        histogram!("record_store_call_duration_seconds", "operation" => operation)
            .record(duration_secs);

        tracing::debug!(
            operation = operation,
            outcome = outcome,
            duration_secs = duration_secs,
            "Record store call finished"
        );
    }

    /// Record how many records a list call returned
    pub fn record_listed(count: usize, pages: usize) {
        counter!("record_store_records_listed_total").increment(count as u64);

        tracing::debug!(count = count, pages = pages, "Listed records");
    }
}
