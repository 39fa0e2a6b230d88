//! Balanço HTTP server library.
//!
//! Exposed as a library so integration tests can build the full router
//! against a throwaway database.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};
