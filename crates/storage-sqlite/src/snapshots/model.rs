//! Database models for snapshots.
//!
//! Monetary columns are stored as TEXT and parsed into `Decimal` on read,
//! keeping full precision in SQLite without a numeric column type.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use balanco_core::periods::Period;
use balanco_core::snapshots::Snapshot;

/// Parses a stored amount column, falling back to zero for corrupt rows.
fn decimal_column(value: &str, column: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(amount) => amount,
        Err(err) => {
            log::error!("Failed to parse {column} '{value}': {err}. Falling back to ZERO.");
            Decimal::ZERO
        }
    }
}

/// Database model for snapshots.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: String,
    pub user_id: String,
    pub period: String,
    pub cash_balance: String,
    pub bank_balance: String,
    pub accounts_receivable: String,
    pub inventory_balance: String,
    pub other_credits: String,
    pub fixed_assets: String,
    pub investments: String,
    pub accounts_payable: String,
    pub loans_financing: String,
    pub installments_payable: String,
    pub total_sales: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to and from the domain model

impl From<SnapshotDB> for Snapshot {
    fn from(db: SnapshotDB) -> Self {
        let period = Period::parse(&db.period).unwrap_or_else(|err| {
            log::error!("Stored period '{}' is not parseable: {err}", db.period);
            Period::new(0, 0)
        });
        Self {
            id: db.id,
            user_id: db.user_id,
            period,
            cash_balance: decimal_column(&db.cash_balance, "cash_balance"),
            bank_balance: decimal_column(&db.bank_balance, "bank_balance"),
            accounts_receivable: decimal_column(&db.accounts_receivable, "accounts_receivable"),
            inventory_balance: decimal_column(&db.inventory_balance, "inventory_balance"),
            other_credits: decimal_column(&db.other_credits, "other_credits"),
            fixed_assets: decimal_column(&db.fixed_assets, "fixed_assets"),
            investments: decimal_column(&db.investments, "investments"),
            accounts_payable: decimal_column(&db.accounts_payable, "accounts_payable"),
            loans_financing: decimal_column(&db.loans_financing, "loans_financing"),
            installments_payable: decimal_column(&db.installments_payable, "installments_payable"),
            total_sales: decimal_column(&db.total_sales, "total_sales"),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Snapshot> for SnapshotDB {
    fn from(domain: Snapshot) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            period: domain.period.to_string(),
            cash_balance: domain.cash_balance.to_string(),
            bank_balance: domain.bank_balance.to_string(),
            accounts_receivable: domain.accounts_receivable.to_string(),
            inventory_balance: domain.inventory_balance.to_string(),
            other_credits: domain.other_credits.to_string(),
            fixed_assets: domain.fixed_assets.to_string(),
            investments: domain.investments.to_string(),
            accounts_payable: domain.accounts_payable.to_string(),
            loans_financing: domain.loans_financing.to_string(),
            installments_payable: domain.installments_payable.to_string(),
            total_sales: domain.total_sales.to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
