//! Metrics engine implementation.
//!
//! The engine is a pure fold over the chronologically ascending snapshot
//! series: the only state carried between rows is the previous period's
//! equity, and nothing is persisted.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::money;
use crate::snapshots::{Snapshot, SnapshotRepositoryTrait};

use super::metrics_model::MetricRow;
use super::metrics_traits::MetricsServiceTrait;

/// Derives the trend report from an ordered snapshot series.
///
/// The input must already be sorted ascending by period; the repository's
/// `list_by_user` guarantees that.
pub fn compute_rows(snapshots: &[Snapshot]) -> Vec<MetricRow> {
    let mut rows = Vec::with_capacity(snapshots.len());
    let mut previous_equity: Option<Decimal> = None;

    for snapshot in snapshots {
        let equity = snapshot.equity();

        let variation = match previous_equity {
            // First period, or an undefined percentage base.
            None => "N/A".to_string(),
            Some(prev) if prev.is_zero() => "N/A".to_string(),
            Some(prev) => {
                let pct = (equity - prev) / prev * dec!(100);
                if pct.is_zero() {
                    "0,00%".to_string()
                } else {
                    format!("{:+.2}%", pct.to_f64().unwrap_or_default())
                }
            }
        };

        let revenue_result = if snapshot.total_sales > Decimal::ZERO {
            equity / snapshot.total_sales * dec!(100)
        } else {
            Decimal::ZERO
        };

        rows.push(MetricRow {
            month: snapshot.period,
            equity: money::format_brl(equity),
            equity_raw: equity.to_f64().unwrap_or_default(),
            variation,
            revenue_result: format!("{:.2}%", revenue_result.to_f64().unwrap_or_default()),
        });

        previous_equity = Some(equity);
    }

    rows
}

pub struct MetricsService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl MetricsService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        MetricsService { repository }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn compute_series(&self, owner_id: &str) -> Result<Vec<MetricRow>> {
        let snapshots = self.repository.list_by_user(owner_id)?;
        Ok(compute_rows(&snapshots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::periods::Period;
    use rust_decimal_macros::dec;

    fn snapshot(period: &str, cash: Decimal, sales: Decimal) -> Snapshot {
        let now = chrono::Utc::now().naive_utc();
        Snapshot {
            id: format!("s-{period}"),
            user_id: "u1".to_string(),
            period: Period::parse(period).unwrap(),
            cash_balance: cash,
            bank_balance: Decimal::ZERO,
            accounts_receivable: Decimal::ZERO,
            inventory_balance: Decimal::ZERO,
            other_credits: Decimal::ZERO,
            fixed_assets: Decimal::ZERO,
            investments: Decimal::ZERO,
            accounts_payable: Decimal::ZERO,
            loans_financing: Decimal::ZERO,
            installments_payable: Decimal::ZERO,
            total_sales: sales,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn first_row_has_no_variation_and_later_rows_are_relative() {
        let rows = compute_rows(&[
            snapshot("01/2024", dec!(1000), dec!(0)),
            snapshot("02/2024", dec!(1100), dec!(0)),
            snapshot("03/2024", dec!(990), dec!(0)),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].variation, "N/A");
        assert_eq!(rows[1].variation, "+10.00%");
        assert_eq!(rows[2].variation, "-10.00%");
        assert_eq!(rows[0].equity, "R$ 1.000,00");
        assert_eq!(rows[0].equity_raw, 1000.0);
    }

    #[test]
    fn zero_previous_equity_yields_not_applicable() {
        let rows = compute_rows(&[
            snapshot("01/2024", dec!(0), dec!(0)),
            snapshot("02/2024", dec!(500), dec!(0)),
        ]);
        assert_eq!(rows[1].variation, "N/A");
    }

    #[test]
    fn unchanged_equity_renders_the_zero_variation_form() {
        let rows = compute_rows(&[
            snapshot("01/2024", dec!(800), dec!(0)),
            snapshot("02/2024", dec!(800), dec!(0)),
        ]);
        assert_eq!(rows[1].variation, "0,00%");
    }

    #[test]
    fn revenue_result_is_zero_when_there_are_no_sales() {
        let rows = compute_rows(&[snapshot("01/2024", dec!(500), dec!(0))]);
        assert_eq!(rows[0].revenue_result, "0.00%");

        let rows = compute_rows(&[snapshot("01/2024", dec!(500), dec!(1000))]);
        assert_eq!(rows[0].revenue_result, "50.00%");
    }

    #[test]
    fn empty_series_yields_an_empty_report() {
        assert!(compute_rows(&[]).is_empty());
    }
}
