//! Snapshots module - domain models, service, and traits.

mod snapshots_errors;
mod snapshots_model;
mod snapshots_service;
mod snapshots_traits;

pub use snapshots_errors::SnapshotError;
pub use snapshots_model::{NewSnapshot, Snapshot, SnapshotUpdate};
pub use snapshots_service::SnapshotService;
pub use snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
