use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use balanco_core::periods::Period;
use balanco_core::snapshots::{Snapshot, SnapshotRepositoryTrait};
use balanco_core::Result;

use super::model::SnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::snapshots;

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn get_by_period(&self, owner_id: &str, period: &Period) -> Result<Option<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let row = snapshots::table
            .filter(snapshots::user_id.eq(owner_id))
            .filter(snapshots::period.eq(period.to_string()))
            .first::<SnapshotDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Snapshot::from))
    }

    fn list_by_user(&self, owner_id: &str) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = snapshots::table
            .filter(snapshots::user_id.eq(owner_id))
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;
        // Sort after parsing: the TEXT column orders lexicographically,
        // which is wrong across year boundaries.
        let mut result: Vec<Snapshot> = rows.into_iter().map(Snapshot::from).collect();
        result.sort_by_key(|s| s.period);
        Ok(result)
    }

    fn list_periods(&self, owner_id: &str) -> Result<Vec<Period>> {
        let mut conn = get_connection(&self.pool)?;
        let stored = snapshots::table
            .filter(snapshots::user_id.eq(owner_id))
            .select(snapshots::period)
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;
        let mut periods: Vec<Period> = stored
            .iter()
            .filter_map(|raw| match Period::parse(raw) {
                Ok(period) => Some(period),
                Err(err) => {
                    log::error!("Skipping unparseable stored period '{raw}': {err}");
                    None
                }
            })
            .collect();
        periods.sort_unstable();
        periods.reverse();
        Ok(periods)
    }

    async fn insert(&self, snapshot: Snapshot) -> Result<Snapshot> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Snapshot> {
                let snapshot_db: SnapshotDB = snapshot.into();
                let result_db = diesel::insert_into(snapshots::table)
                    .values(&snapshot_db)
                    .returning(SnapshotDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Snapshot::from(result_db))
            })
            .await
    }

    async fn update(&self, snapshot: Snapshot) -> Result<Snapshot> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Snapshot> {
                let snapshot_db: SnapshotDB = snapshot.into();
                let result_db = diesel::update(snapshots::table.find(&snapshot_db.id))
                    .set(&snapshot_db)
                    .returning(SnapshotDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Snapshot::from(result_db))
            })
            .await
    }

    async fn delete(&self, owner_id: &str, period: &Period) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let canonical = period.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    snapshots::table
                        .filter(snapshots::user_id.eq(owner_id))
                        .filter(snapshots::period.eq(canonical)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
