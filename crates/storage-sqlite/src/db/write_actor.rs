//! Serialized database writer.
//!
//! SQLite allows a single writer at a time, so all mutating operations are
//! funneled through one background task that owns a dedicated connection
//! and processes jobs in order. Every job runs inside an immediate
//! transaction: it commits on success and rolls back on any error, so no
//! partial writes survive a failed operation.

use std::any::Any;

use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};

use balanco_core::errors::{Error, Result};

use super::DbPool;
use crate::errors::StorageError;

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Transaction error wrapper. Keeps the job's core error intact (so e.g. a
/// unique violation survives the round trip) while still satisfying the
/// `From<diesel::result::Error>` bound the transaction machinery needs for
/// commit/rollback failures.
enum TxError {
    Core(Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        TxError::Core(StorageError::QueryFailed(err).into())
    }
}

impl From<Error> for TxError {
    fn from(err: Error) -> Self {
        TxError::Core(err)
    }
}

/// Handle for sending jobs to the writer task.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer's dedicated connection and
    /// awaits its result. The job runs inside an immediate transaction.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        // Type-erase the return value so one channel serves every job.
        let erased: ErasedJob =
            Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>));

        self.tx.send((erased, reply_tx)).await.map_err(|_| {
            Error::Database(balanco_core::errors::DatabaseError::Internal(
                "Database writer task is no longer running".to_string(),
            ))
        })?;

        let result = reply_rx.await.map_err(|_| {
            Error::Database(balanco_core::errors::DatabaseError::Internal(
                "Database writer task dropped the reply".to_string(),
            ))
        })?;

        result.map(|boxed| {
            *boxed
                .downcast::<T>()
                .unwrap_or_else(|_| panic!("Writer job returned an unexpected type"))
        })
    }
}

/// Spawns the background writer task. It holds one pooled connection for
/// its whole lifetime and stops when the last [`WriteHandle`] is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to acquire the writer connection from the pool");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, TxError, _>(|c| job(c).map_err(TxError::from))
                .map_err(|TxError::Core(e)| e);

            // The receiver may have been dropped (request cancelled); the
            // transaction outcome stands either way.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
