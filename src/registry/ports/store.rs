//! Entry store port for algorithm registration and lookup.

use crate::registry::domain::{AlgorithmEntry, AlgorithmName, Category, RegistryDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for entry store operations.
pub type EntryStoreResult<T> = Result<T, EntryStoreError>;

/// Keyed storage contract for registered algorithm entries.
///
/// Implementations must be safe under arbitrarily many concurrent readers
/// and a single writer at a time, with every mutating operation applied
/// atomically: a reader never observes a half-applied batch or a partially
/// updated entry.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Bulk-loads a batch of entries, all-or-nothing.
    ///
    /// Used once at startup for the static catalog. On failure the store is
    /// left exactly as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`EntryStoreError::DuplicateKey`] when two batch entries
    /// share a `(category, name)` or the batch collides with a pre-existing
    /// entry, and [`EntryStoreError::InvalidEntry`] when an entry violates
    /// the domain invariants.
    async fn load(&self, entries: Vec<AlgorithmEntry>) -> EntryStoreResult<()>;

    /// Adds one entry.
    ///
    /// With `overwrite` set, an existing entry under the same key is
    /// replaced atomically and wholly; nothing of the previous entry
    /// survives.
    ///
    /// # Errors
    ///
    /// Returns [`EntryStoreError::DuplicateKey`] when the key exists and
    /// `overwrite` is false, or [`EntryStoreError::InvalidEntry`] when the
    /// entry violates the domain invariants.
    async fn register(&self, entry: AlgorithmEntry, overwrite: bool) -> EntryStoreResult<()>;

    /// Removes an entry. Builtins may be unregistered like any other entry.
    ///
    /// # Errors
    ///
    /// Returns [`EntryStoreError::NotFound`] when no entry exists under the
    /// key.
    async fn unregister(&self, category: Category, name: &AlgorithmName) -> EntryStoreResult<()>;

    /// Finds an entry by category and name.
    ///
    /// Absence is `Ok(None)`, never an error; the `Result` exists only so
    /// adapters can surface storage faults.
    async fn lookup(
        &self,
        category: Category,
        name: &AlgorithmName,
    ) -> EntryStoreResult<Option<AlgorithmEntry>>;

    /// Returns all entries of a category, in registration order.
    async fn list_by_category(&self, category: Category) -> EntryStoreResult<Vec<AlgorithmEntry>>;
}

/// Errors returned by entry store implementations.
#[derive(Debug, Clone, Error)]
pub enum EntryStoreError {
    /// An entry already exists under the `(category, name)` key.
    #[error("duplicate {category} entry: {name}")]
    DuplicateKey {
        /// Category of the colliding key.
        category: Category,
        /// Name of the colliding key.
        name: AlgorithmName,
    },

    /// No entry exists under the `(category, name)` key.
    #[error("no {category} entry registered under name '{name}'")]
    NotFound {
        /// Category of the missing key.
        category: Category,
        /// Name of the missing key.
        name: AlgorithmName,
    },

    /// The entry violates a domain invariant.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] RegistryDomainError),

    /// Storage-layer failure (e.g. a poisoned lock).
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl EntryStoreError {
    /// Wraps a storage-layer fault.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
