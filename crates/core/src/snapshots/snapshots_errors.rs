//! Snapshot-specific error types.

use thiserror::Error;

use crate::periods::Period;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("A snapshot already exists for period {0}")]
    DuplicatePeriod(Period),

    #[error("No snapshot found for period {0}")]
    NotFound(Period),

    #[error("Field '{0}' is not a valid number")]
    InvalidField(String),
}
