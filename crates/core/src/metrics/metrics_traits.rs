use crate::errors::Result;
use crate::metrics::metrics_model::MetricRow;

/// Trait for metrics service operations.
pub trait MetricsServiceTrait: Send + Sync {
    /// Derives the trend report for a user, one row per snapshot in
    /// chronological order.
    fn compute_series(&self, owner_id: &str) -> Result<Vec<MetricRow>>;
}
