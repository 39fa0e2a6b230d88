//! Balanço Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Balanço: period keys,
//! currency parsing/formatting, the monthly snapshot store, and the
//! derived-metrics engine. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod metrics;
pub mod money;
pub mod periods;
pub mod snapshots;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
