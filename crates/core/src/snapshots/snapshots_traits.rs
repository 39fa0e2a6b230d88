use crate::errors::Result;
use crate::periods::Period;
use crate::snapshots::snapshots_model::{NewSnapshot, Snapshot, SnapshotUpdate};
use async_trait::async_trait;

/// Trait for snapshot repository operations.
///
/// Reads are synchronous pool lookups; writes go through the storage
/// layer's serialized writer and run inside a transaction.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    fn get_by_period(&self, owner_id: &str, period: &Period) -> Result<Option<Snapshot>>;
    /// All snapshots for a user, ascending chronological by period.
    fn list_by_user(&self, owner_id: &str) -> Result<Vec<Snapshot>>;
    /// Distinct periods for a user, most recent first.
    fn list_periods(&self, owner_id: &str) -> Result<Vec<Period>>;
    async fn insert(&self, snapshot: Snapshot) -> Result<Snapshot>;
    async fn update(&self, snapshot: Snapshot) -> Result<Snapshot>;
    /// Returns the number of rows removed.
    async fn delete(&self, owner_id: &str, period: &Period) -> Result<usize>;
}

/// Trait for snapshot service operations.
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    async fn create_snapshot(&self, owner_id: &str, input: NewSnapshot) -> Result<Snapshot>;
    async fn update_snapshot(&self, owner_id: &str, input: SnapshotUpdate) -> Result<Snapshot>;
    async fn delete_snapshot(&self, owner_id: &str, period_raw: &str) -> Result<()>;
    fn get_snapshot(&self, owner_id: &str, period_raw: &str) -> Result<Snapshot>;
    fn get_snapshots(&self, owner_id: &str) -> Result<Vec<Snapshot>>;
    fn get_periods(&self, owner_id: &str) -> Result<Vec<Period>>;
}
