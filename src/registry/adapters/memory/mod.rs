//! In-memory adapter implementations.

mod entry_store;

pub use entry_store::InMemoryEntryStore;
