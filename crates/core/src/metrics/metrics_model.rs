//! Metrics domain models.

use serde::Serialize;

use crate::periods::Period;

/// One row of the trend report: a period together with its derived metrics.
///
/// `equity` carries the formatted currency text for tables; `equity_raw`
/// carries the plain number for charting. `variation` is the
/// month-over-month equity change (`"N/A"` for the first period or when the
/// previous equity is zero); `revenue_result` is equity as a percentage of
/// the period's total sales.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricRow {
    pub month: Period,
    pub equity: String,
    pub equity_raw: f64,
    pub variation: String,
    pub revenue_result: String,
}
