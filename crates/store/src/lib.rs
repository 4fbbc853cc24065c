//! In-memory activity store
//!
//! This crate holds the process-wide activity catalogue behind a single
//! store-wide lock, so concurrent roster changes never lose updates.

pub mod memory;

// Re-export key types
pub use memory::ActivityStore;
pub use mergington_protocol::{Activity, Catalog, RosterError};
