//! Property-based tests for the money codec, period keys, and the
//! metrics engine, using the `proptest` crate for random case generation.

use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use balanco_core::metrics::compute_rows;
use balanco_core::money::{format_brl, parse_brl};
use balanco_core::periods::Period;
use balanco_core::snapshots::Snapshot;

// =============================================================================
// Generators
// =============================================================================

/// Two-decimal amounts within a generous balance-sheet range.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_period() -> impl Strategy<Value = Period> {
    (2000i32..=2099, 1u32..=12).prop_map(|(year, month)| Period::new(year, month))
}

fn arb_snapshot_fields() -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(arb_amount(), 11)
}

fn snapshot(period: Period, fields: &[Decimal]) -> Snapshot {
    let now = chrono::Utc::now().naive_utc();
    Snapshot {
        id: format!("s-{period}"),
        user_id: "u1".to_string(),
        period,
        cash_balance: fields[0],
        bank_balance: fields[1],
        accounts_receivable: fields[2],
        inventory_balance: fields[3],
        other_credits: fields[4],
        fixed_assets: fields[5],
        investments: fields[6],
        accounts_payable: fields[7],
        loans_financing: fields[8],
        installments_payable: fields[9],
        total_sales: fields[10],
        created_at: now,
        updated_at: now,
    }
}

/// An ascending series of snapshots with distinct periods.
fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<Snapshot>> {
    proptest::collection::btree_set(arb_period(), 0..=max_len).prop_flat_map(|periods| {
        let periods: Vec<Period> = periods.into_iter().collect();
        let len = periods.len();
        proptest::collection::vec(arb_snapshot_fields(), len).prop_map(move |all_fields| {
            periods
                .iter()
                .zip(all_fields.iter())
                .map(|(period, fields)| snapshot(*period, fields))
                .collect()
        })
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Formatting then parsing a two-decimal amount returns the amount.
    #[test]
    fn prop_money_round_trips(amount in arb_amount()) {
        prop_assert_eq!(parse_brl(&format_brl(amount)), amount);
    }

    /// Re-parsing a period's canonical form is the identity, regardless of
    /// the zero-padding of the input.
    #[test]
    fn prop_period_normalization_is_idempotent(period in arb_period()) {
        let unpadded = format!("{}/{}", period.month, period.year);
        let parsed = Period::parse(&unpadded).unwrap();
        prop_assert_eq!(parsed, period);
        prop_assert_eq!(Period::parse(&parsed.to_string()).unwrap(), parsed);
    }

    /// Chronological ordering agrees with the (year, month) tuple order.
    #[test]
    fn prop_period_order_is_chronological(a in arb_period(), b in arb_period()) {
        prop_assert_eq!(a.cmp(&b), (a.year, a.month).cmp(&(b.year, b.month)));
    }

    /// The report has one row per snapshot, in the input order, and the
    /// first row never has a variation.
    #[test]
    fn prop_report_shape_matches_the_series(series in arb_series(8)) {
        let rows = compute_rows(&series);
        prop_assert_eq!(rows.len(), series.len());
        for (row, snapshot) in rows.iter().zip(series.iter()) {
            prop_assert_eq!(row.month, snapshot.period);
        }
        if let Some(first) = rows.first() {
            prop_assert_eq!(first.variation.as_str(), "N/A");
        }
    }

    /// The variation's sign always matches the direction of the equity
    /// change, and a zero previous equity never produces a percentage.
    #[test]
    fn prop_variation_sign_tracks_equity_direction(series in arb_series(8)) {
        let rows = compute_rows(&series);
        for (i, row) in rows.iter().enumerate().skip(1) {
            let prev = series[i - 1].equity();
            let current = series[i].equity();
            if prev.is_zero() {
                prop_assert_eq!(row.variation.as_str(), "N/A");
            } else if (current - prev) / prev > Decimal::ZERO {
                prop_assert!(row.variation.starts_with('+'), "got {}", row.variation);
            } else if (current - prev) / prev < Decimal::ZERO {
                prop_assert!(row.variation.starts_with('-'), "got {}", row.variation);
            }
        }
    }

    /// Equity is reported consistently in formatted and raw form, and
    /// revenue_result is exactly "0.00%" whenever there are no sales.
    #[test]
    fn prop_row_values_derive_from_the_snapshot(series in arb_series(8)) {
        let rows = compute_rows(&series);
        for (row, snapshot) in rows.iter().zip(series.iter()) {
            let equity = snapshot.equity();
            prop_assert_eq!(row.equity.clone(), format_brl(equity));
            prop_assert_eq!(row.equity_raw, equity.to_f64().unwrap());
            if snapshot.total_sales <= Decimal::ZERO {
                prop_assert_eq!(row.revenue_result.as_str(), "0.00%");
            }
        }
    }
}
