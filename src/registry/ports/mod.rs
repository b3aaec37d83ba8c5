//! Port contracts for the algorithm capability registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry
//! services.

pub mod store;

pub use store::{EntryStore, EntryStoreError, EntryStoreResult};
