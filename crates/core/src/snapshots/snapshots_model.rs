//! Snapshot domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::MoneyInput;
use crate::periods::Period;

/// One user's recorded financial position for a single calendar month.
///
/// Exactly zero or one snapshot exists per `(user_id, period)`; the storage
/// layer enforces this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub id: String,
    pub user_id: String,
    pub period: Period,
    pub cash_balance: Decimal,
    pub bank_balance: Decimal,
    pub accounts_receivable: Decimal,
    pub inventory_balance: Decimal,
    pub other_credits: Decimal,
    pub fixed_assets: Decimal,
    pub investments: Decimal,
    pub accounts_payable: Decimal,
    pub loans_financing: Decimal,
    pub installments_payable: Decimal,
    pub total_sales: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Snapshot {
    /// Net equity: asset-like fields minus liability-like fields.
    pub fn equity(&self) -> Decimal {
        self.cash_balance
            + self.bank_balance
            + self.accounts_receivable
            + self.inventory_balance
            + self.other_credits
            + self.fixed_assets
            + self.investments
            - self.accounts_payable
            - self.loans_financing
            - self.installments_payable
    }
}

/// Input model for creating a snapshot.
///
/// Monetary fields accept either raw JSON numbers or formatted currency
/// text; absent fields default to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSnapshot {
    pub period: String,
    #[serde(default)]
    pub cash_balance: MoneyInput,
    #[serde(default)]
    pub bank_balance: MoneyInput,
    #[serde(default)]
    pub accounts_receivable: MoneyInput,
    #[serde(default)]
    pub inventory_balance: MoneyInput,
    #[serde(default)]
    pub other_credits: MoneyInput,
    #[serde(default)]
    pub fixed_assets: MoneyInput,
    #[serde(default)]
    pub investments: MoneyInput,
    #[serde(default)]
    pub accounts_payable: MoneyInput,
    #[serde(default)]
    pub loans_financing: MoneyInput,
    #[serde(default)]
    pub installments_payable: MoneyInput,
    #[serde(default)]
    pub total_sales: MoneyInput,
}

/// Input model for updating an existing snapshot.
///
/// Unlike the create path, every field is required and must convert
/// strictly to a number.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotUpdate {
    pub period: String,
    pub cash_balance: MoneyInput,
    pub bank_balance: MoneyInput,
    pub accounts_receivable: MoneyInput,
    pub inventory_balance: MoneyInput,
    pub other_credits: MoneyInput,
    pub fixed_assets: MoneyInput,
    pub investments: MoneyInput,
    pub accounts_payable: MoneyInput,
    pub loans_financing: MoneyInput,
    pub installments_payable: MoneyInput,
    pub total_sales: MoneyInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot_with(assets: Decimal, liabilities: Decimal) -> Snapshot {
        let now = chrono::Utc::now().naive_utc();
        Snapshot {
            id: "s1".to_string(),
            user_id: "u1".to_string(),
            period: Period::new(2024, 1),
            cash_balance: assets,
            bank_balance: Decimal::ZERO,
            accounts_receivable: Decimal::ZERO,
            inventory_balance: Decimal::ZERO,
            other_credits: Decimal::ZERO,
            fixed_assets: Decimal::ZERO,
            investments: Decimal::ZERO,
            accounts_payable: liabilities,
            loans_financing: Decimal::ZERO,
            installments_payable: Decimal::ZERO,
            total_sales: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn equity_subtracts_liabilities_from_assets() {
        assert_eq!(snapshot_with(dec!(1500), dec!(500)).equity(), dec!(1000));
        assert_eq!(snapshot_with(dec!(100), dec!(300)).equity(), dec!(-200));
    }

    #[test]
    fn new_snapshot_defaults_absent_fields_to_zero() {
        let input: NewSnapshot =
            serde_json::from_str(r#"{"period": "01/2024", "cash_balance": "R$ 10,00"}"#).unwrap();
        assert_eq!(input.cash_balance.to_decimal_lenient(), dec!(10));
        assert_eq!(input.total_sales.to_decimal_lenient(), Decimal::ZERO);
    }
}
