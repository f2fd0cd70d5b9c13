//! Product validation metrics.

use metrics::counter;

/// Validation metrics recorder
pub struct ValidationMetrics;

impl ValidationMetrics {
    /// Record the outcome of one validation run
    pub fn record(valid: bool, error_count: usize) {
        let outcome = if valid { "valid" } else { "invalid" };
        counter!("product_validations_total", "outcome" => outcome).increment(1);

        if error_count > 0 {
            counter!("product_validation_errors_total").increment(error_count as u64);
        }
    }
}
