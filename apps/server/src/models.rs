//! Wire-format models for the HTTP API.
//!
//! Domain types stay in `balanco-core`; this module holds the shapes the
//! API hands to clients, with monetary fields rendered as formatted
//! currency text.

use serde::{Deserialize, Serialize};

use balanco_core::metrics::MetricRow;
use balanco_core::money::format_brl;
use balanco_core::periods::Period;
use balanco_core::snapshots::Snapshot;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        StatusMessage {
            status: "success",
            message: message.into(),
        }
    }
}

/// A snapshot as presented to clients: every monetary field formatted as
/// currency text.
#[derive(Debug, Serialize)]
pub struct SnapshotView {
    pub id: String,
    pub period: Period,
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
}

impl From<Snapshot> for SnapshotView {
    fn from(snapshot: Snapshot) -> Self {
        SnapshotView {
            id: snapshot.id,
            period: snapshot.period,
            cash_balance: format_brl(snapshot.cash_balance),
            bank_balance: format_brl(snapshot.bank_balance),
            accounts_receivable: format_brl(snapshot.accounts_receivable),
            inventory_balance: format_brl(snapshot.inventory_balance),
            other_credits: format_brl(snapshot.other_credits),
            fixed_assets: format_brl(snapshot.fixed_assets),
            investments: format_brl(snapshot.investments),
            accounts_payable: format_brl(snapshot.accounts_payable),
            loans_financing: format_brl(snapshot.loans_financing),
            installments_payable: format_brl(snapshot.installments_payable),
            total_sales: format_brl(snapshot.total_sales),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub status: &'static str,
    pub data: Vec<MetricRow>,
}

impl MetricsResponse {
    pub fn new(data: Vec<MetricRow>) -> Self {
        MetricsResponse {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}
