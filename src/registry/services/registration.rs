//! Service layer for algorithm registration, removal, and enumeration.
//!
//! Provides [`RegistryService`] which coordinates runtime registration of
//! custom algorithms, unregistration, and the ordered listings consumed by
//! CLI and help surfaces.

use crate::registry::{
    domain::{
        AlgorithmEntry, AlgorithmName, ArgMap, Category, EntrySource, ImplementationRef,
        RegistryDomainError, ValidatorBinding,
    },
    ports::{EntryStore, EntryStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Provenance tag applied when a registration request carries none.
const DEFAULT_RUNTIME_SOURCE: &str = "user";

/// Request payload for registering an algorithm entry at runtime.
#[derive(Debug, Clone)]
pub struct RegisterAlgorithmRequest {
    category: Category,
    name: String,
    implementation: String,
    validator: Option<ValidatorBinding>,
    default_args: ArgMap,
    accepts_args: bool,
    source: Option<String>,
    overwrite: bool,
}

impl RegisterAlgorithmRequest {
    /// Creates a request with the required fields; the entry accepts
    /// arguments, carries no defaults or validator, and does not overwrite.
    #[must_use]
    pub fn new(
        category: Category,
        name: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            implementation: implementation.into(),
            validator: None,
            default_args: ArgMap::new(),
            accepts_args: true,
            source: None,
            overwrite: false,
        }
    }

    /// Binds an argument validation routine.
    #[must_use]
    pub fn with_validator(mut self, validator: ValidatorBinding) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Sets entry-level default arguments.
    #[must_use]
    pub fn with_default_args(mut self, default_args: ArgMap) -> Self {
        self.default_args = default_args;
        self
    }

    /// Declares that the implementation takes no configuration.
    #[must_use]
    pub const fn args_disabled(mut self) -> Self {
        self.accepts_args = false;
        self
    }

    /// Sets the provenance tag recorded on the entry.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Requests replacement of an existing entry under the same key.
    #[must_use]
    pub const fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

/// One row of an enumeration listing: `(name, source)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmListing {
    name: AlgorithmName,
    source: EntrySource,
}

impl AlgorithmListing {
    /// Returns the entry name.
    #[must_use]
    pub const fn name(&self) -> &AlgorithmName {
        &self.name
    }

    /// Returns the entry provenance.
    #[must_use]
    pub const fn source(&self) -> &EntrySource {
        &self.source
    }
}

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum RegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RegistryDomainError),
    /// Entry store operation failed.
    #[error(transparent)]
    Store(#[from] EntryStoreError),
}

/// Result type for registry service operations.
pub type RegistryServiceResult<T> = Result<T, RegistryServiceError>;

/// Algorithm registration and enumeration orchestration service.
#[derive(Clone)]
pub struct RegistryService<S, C>
where
    S: EntryStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> RegistryService<S, C>
where
    S: EntryStore,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Registers an algorithm entry.
    ///
    /// Registration is a full replacement when overwriting: nothing of a
    /// previously registered entry under the same key survives.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the request fails
    /// validation, or [`RegistryServiceError::Store`] when the key already
    /// exists without overwrite being requested.
    pub async fn register(
        &self,
        request: RegisterAlgorithmRequest,
    ) -> RegistryServiceResult<AlgorithmEntry> {
        let RegisterAlgorithmRequest {
            category,
            name,
            implementation,
            validator,
            default_args,
            accepts_args,
            source,
            overwrite,
        } = request;

        let algorithm_name = AlgorithmName::new(name)?;
        let implementation_ref = ImplementationRef::new(implementation)?;
        let entry_source = source.map_or_else(
            || EntrySource::Custom(DEFAULT_RUNTIME_SOURCE.to_owned()),
            EntrySource::from,
        );

        let mut entry = AlgorithmEntry::new(
            category,
            algorithm_name,
            implementation_ref,
            entry_source,
            &*self.clock,
        )
        .with_default_args(default_args);
        if let Some(binding) = validator {
            entry = entry.with_validator(binding);
        }
        if !accepts_args {
            entry = entry.args_disabled()?;
        }

        self.store.register(entry.clone(), overwrite).await?;
        Ok(entry)
    }

    /// Removes an entry. Builtins may be unregistered like any other entry,
    /// which keeps test runs isolated.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the name string fails
    /// validation, or [`RegistryServiceError::Store`] when no entry exists
    /// under the key.
    pub async fn unregister(&self, category: Category, name: &str) -> RegistryServiceResult<()> {
        let algorithm_name = AlgorithmName::new(name)?;
        Ok(self.store.unregister(category, &algorithm_name).await?)
    }

    /// Finds an entry by category and name.
    ///
    /// Returns `Ok(None)` when no entry exists under the key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the name string fails
    /// validation, or [`RegistryServiceError::Store`] on storage faults.
    pub async fn lookup(
        &self,
        category: Category,
        name: &str,
    ) -> RegistryServiceResult<Option<AlgorithmEntry>> {
        let algorithm_name = AlgorithmName::new(name)?;
        Ok(self.store.lookup(category, &algorithm_name).await?)
    }

    /// Returns `(name, source)` listings for a category, in registration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] on storage faults.
    pub async fn list(&self, category: Category) -> RegistryServiceResult<Vec<AlgorithmListing>> {
        let entries = self.store.list_by_category(category).await?;
        Ok(entries
            .into_iter()
            .map(|entry| AlgorithmListing {
                name: entry.name().clone(),
                source: entry.source().clone(),
            })
            .collect())
    }
}
