//! Mergington activity types
//!
//! This crate defines the activity records, roster rules, wire messages and
//! error taxonomy shared by the store, the HTTP adapter and the CLI.

pub mod activity;
pub mod errors;
pub mod messages;

pub use activity::{seed_catalog, Activity, Catalog};
pub use errors::RosterError;
pub use messages::{EmailQuery, ErrorDetail, MessageResponse};

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
