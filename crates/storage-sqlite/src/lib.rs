//! SQLite storage implementation for Balanço.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `balanco-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users and snapshots
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only place in the application where Diesel dependencies
//! exist; all other crates are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod snapshots;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from balanco-core for convenience
pub use balanco_core::errors::{DatabaseError, Error, Result};
