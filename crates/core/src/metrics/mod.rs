//! Metrics module - the derived trend-report engine.

mod metrics_model;
mod metrics_service;
mod metrics_traits;

pub use metrics_model::MetricRow;
pub use metrics_service::{compute_rows, MetricsService};
pub use metrics_traits::MetricsServiceTrait;
