//! Snapshot service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{DatabaseError, Error, Result};
use crate::money::MoneyInput;
use crate::periods::{Period, PeriodError};

use super::snapshots_errors::SnapshotError;
use super::snapshots_model::{NewSnapshot, Snapshot, SnapshotUpdate};
use super::snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};

pub struct SnapshotService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        SnapshotService { repository }
    }

    fn strict_field(field: &str, value: &MoneyInput) -> Result<Decimal> {
        value
            .to_decimal_strict()
            .map_err(|_| SnapshotError::InvalidField(field.to_string()).into())
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn create_snapshot(&self, owner_id: &str, input: NewSnapshot) -> Result<Snapshot> {
        let period = Period::parse(&input.period)?;
        if !period.is_valid() {
            return Err(PeriodError::OutOfRange(period.to_string()).into());
        }

        if self.repository.get_by_period(owner_id, &period)?.is_some() {
            return Err(SnapshotError::DuplicatePeriod(period).into());
        }

        let now = Utc::now().naive_utc();
        let snapshot = Snapshot {
            id: Uuid::new_v4().to_string(),
            user_id: owner_id.to_string(),
            period,
            cash_balance: input.cash_balance.to_decimal_lenient(),
            bank_balance: input.bank_balance.to_decimal_lenient(),
            accounts_receivable: input.accounts_receivable.to_decimal_lenient(),
            inventory_balance: input.inventory_balance.to_decimal_lenient(),
            other_credits: input.other_credits.to_decimal_lenient(),
            fixed_assets: input.fixed_assets.to_decimal_lenient(),
            investments: input.investments.to_decimal_lenient(),
            accounts_payable: input.accounts_payable.to_decimal_lenient(),
            loans_financing: input.loans_financing.to_decimal_lenient(),
            installments_payable: input.installments_payable.to_decimal_lenient(),
            total_sales: input.total_sales.to_decimal_lenient(),
            created_at: now,
            updated_at: now,
        };

        debug!("Creating snapshot for user {owner_id}, period {period}");

        // The unique index on (user_id, period) is the authoritative guard:
        // two concurrent creates can both pass the read above, but only one
        // insert can win.
        match self.repository.insert(snapshot).await {
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                Err(SnapshotError::DuplicatePeriod(period).into())
            }
            other => other,
        }
    }

    async fn update_snapshot(&self, owner_id: &str, input: SnapshotUpdate) -> Result<Snapshot> {
        let period = Period::parse(&input.period)?;
        let mut snapshot = self
            .repository
            .get_by_period(owner_id, &period)?
            .ok_or(SnapshotError::NotFound(period))?;

        snapshot.cash_balance = Self::strict_field("cash_balance", &input.cash_balance)?;
        snapshot.bank_balance = Self::strict_field("bank_balance", &input.bank_balance)?;
        snapshot.accounts_receivable =
            Self::strict_field("accounts_receivable", &input.accounts_receivable)?;
        snapshot.inventory_balance =
            Self::strict_field("inventory_balance", &input.inventory_balance)?;
        snapshot.other_credits = Self::strict_field("other_credits", &input.other_credits)?;
        snapshot.fixed_assets = Self::strict_field("fixed_assets", &input.fixed_assets)?;
        snapshot.investments = Self::strict_field("investments", &input.investments)?;
        snapshot.accounts_payable =
            Self::strict_field("accounts_payable", &input.accounts_payable)?;
        snapshot.loans_financing =
            Self::strict_field("loans_financing", &input.loans_financing)?;
        snapshot.installments_payable =
            Self::strict_field("installments_payable", &input.installments_payable)?;
        snapshot.total_sales = Self::strict_field("total_sales", &input.total_sales)?;
        snapshot.updated_at = Utc::now().naive_utc();

        debug!("Updating snapshot for user {owner_id}, period {period}");
        self.repository.update(snapshot).await
    }

    async fn delete_snapshot(&self, owner_id: &str, period_raw: &str) -> Result<()> {
        let period = Period::parse(period_raw)?;
        let removed = self.repository.delete(owner_id, &period).await?;
        if removed == 0 {
            return Err(SnapshotError::NotFound(period).into());
        }
        debug!("Deleted snapshot for user {owner_id}, period {period}");
        Ok(())
    }

    fn get_snapshot(&self, owner_id: &str, period_raw: &str) -> Result<Snapshot> {
        let period = Period::parse(period_raw)?;
        self.repository
            .get_by_period(owner_id, &period)?
            .ok_or_else(|| SnapshotError::NotFound(period).into())
    }

    fn get_snapshots(&self, owner_id: &str) -> Result<Vec<Snapshot>> {
        self.repository.list_by_user(owner_id)
    }

    fn get_periods(&self, owner_id: &str) -> Result<Vec<Period>> {
        self.repository.list_periods(owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Vec-backed repository standing in for the SQLite implementation.
    #[derive(Default)]
    struct InMemoryRepository {
        rows: Mutex<Vec<Snapshot>>,
    }

    #[async_trait]
    impl SnapshotRepositoryTrait for InMemoryRepository {
        fn get_by_period(&self, owner_id: &str, period: &Period) -> Result<Option<Snapshot>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|s| s.user_id == owner_id && s.period == *period)
                .cloned())
        }

        fn list_by_user(&self, owner_id: &str) -> Result<Vec<Snapshot>> {
            let rows = self.rows.lock().unwrap();
            let mut result: Vec<Snapshot> = rows
                .iter()
                .filter(|s| s.user_id == owner_id)
                .cloned()
                .collect();
            result.sort_by_key(|s| s.period);
            Ok(result)
        }

        fn list_periods(&self, owner_id: &str) -> Result<Vec<Period>> {
            let mut periods: Vec<Period> = self
                .list_by_user(owner_id)?
                .into_iter()
                .map(|s| s.period)
                .collect();
            periods.reverse();
            Ok(periods)
        }

        async fn insert(&self, snapshot: Snapshot) -> Result<Snapshot> {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|s| s.user_id == snapshot.user_id && s.period == snapshot.period)
            {
                return Err(DatabaseError::UniqueViolation(
                    "snapshots.user_id, snapshots.period".to_string(),
                )
                .into());
            }
            rows.push(snapshot.clone());
            Ok(snapshot)
        }

        async fn update(&self, snapshot: Snapshot) -> Result<Snapshot> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|s| s.id == snapshot.id)
                .ok_or_else(|| DatabaseError::NotFound(snapshot.id.clone()))?;
            *row = snapshot.clone();
            Ok(snapshot)
        }

        async fn delete(&self, owner_id: &str, period: &Period) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|s| !(s.user_id == owner_id && s.period == *period));
            Ok(before - rows.len())
        }
    }

    fn service() -> SnapshotService {
        SnapshotService::new(Arc::new(InMemoryRepository::default()))
    }

    fn new_snapshot(period: &str, cash: &str) -> NewSnapshot {
        serde_json::from_str(&format!(
            r#"{{"period": "{period}", "cash_balance": "{cash}"}}"#
        ))
        .unwrap()
    }

    fn full_update(period: &str, cash: &str) -> SnapshotUpdate {
        serde_json::from_value(serde_json::json!({
            "period": period,
            "cash_balance": cash,
            "bank_balance": 0,
            "accounts_receivable": 0,
            "inventory_balance": 0,
            "other_credits": 0,
            "fixed_assets": 0,
            "investments": 0,
            "accounts_payable": 0,
            "loans_financing": 0,
            "installments_payable": 0,
            "total_sales": 0,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_normalizes_the_period_and_parses_currency_text() {
        let service = service();
        let created = service
            .create_snapshot("u1", new_snapshot("1/2024", "R$ 1.000,00"))
            .await
            .unwrap();
        assert_eq!(created.period.to_string(), "01/2024");
        assert_eq!(created.cash_balance, dec!(1000));
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_and_malformed_periods() {
        let service = service();
        let err = service
            .create_snapshot("u1", new_snapshot("13/2024", "0"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Period(PeriodError::OutOfRange(_))));

        let err = service
            .create_snapshot("u1", new_snapshot("2024", "0"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Period(PeriodError::Malformed(_))));
    }

    #[tokio::test]
    async fn duplicate_periods_collide_after_normalization() {
        let service = service();
        service
            .create_snapshot("u1", new_snapshot("01/2024", "0"))
            .await
            .unwrap();
        let err = service
            .create_snapshot("u1", new_snapshot("1/2024", "0"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Snapshot(SnapshotError::DuplicatePeriod(_))
        ));

        // A different user can use the same period.
        service
            .create_snapshot("u2", new_snapshot("01/2024", "0"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unparseable_create_fields_default_to_zero() {
        let service = service();
        let created = service
            .create_snapshot("u1", new_snapshot("01/2024", "not money"))
            .await
            .unwrap();
        assert_eq!(created.cash_balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn update_requires_an_existing_period_and_strict_numbers() {
        let service = service();
        let err = service
            .update_snapshot("u1", full_update("01/2024", "10"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Snapshot(SnapshotError::NotFound(_))));

        service
            .create_snapshot("u1", new_snapshot("01/2024", "10"))
            .await
            .unwrap();
        let err = service
            .update_snapshot("u1", full_update("01/2024", "R$ 1,00"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Snapshot(SnapshotError::InvalidField(field)) if field == "cash_balance"
        ));

        let updated = service
            .update_snapshot("u1", full_update("01/2024", "25.5"))
            .await
            .unwrap();
        assert_eq!(updated.cash_balance, dec!(25.5));
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn delete_is_keyed_by_period_and_reports_missing_rows() {
        let service = service();
        let err = service.delete_snapshot("u1", "01/2024").await.unwrap_err();
        assert!(matches!(err, Error::Snapshot(SnapshotError::NotFound(_))));

        service
            .create_snapshot("u1", new_snapshot("01/2024", "10"))
            .await
            .unwrap();
        service.delete_snapshot("u1", "01/2024").await.unwrap();
        assert!(service.get_snapshot("u1", "01/2024").is_err());
    }

    #[tokio::test]
    async fn listings_are_chronological_and_stable() {
        let service = service();
        for period in ["02/2023", "01/2024", "12/2023"] {
            service
                .create_snapshot("u1", new_snapshot(period, "0"))
                .await
                .unwrap();
        }

        let ascending: Vec<String> = service
            .get_snapshots("u1")
            .unwrap()
            .iter()
            .map(|s| s.period.to_string())
            .collect();
        assert_eq!(ascending, vec!["02/2023", "12/2023", "01/2024"]);

        let descending: Vec<String> = service
            .get_periods("u1")
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(descending, vec!["01/2024", "12/2023", "02/2023"]);

        // Repeated reads without mutation yield identical results.
        assert_eq!(
            service.get_snapshots("u1").unwrap(),
            service.get_snapshots("u1").unwrap()
        );
    }
}
