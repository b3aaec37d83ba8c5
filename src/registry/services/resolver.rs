//! Resolution of `(category, name, raw arguments)` triples into
//! instantiation descriptors.

use crate::registry::{
    domain::{
        AlgorithmEntry, AlgorithmName, ArgMap, ArgumentRejection, Category, EntrySource,
        ImplementationRef, ValidationOutcome, merge_args,
    },
    ports::{EntryStore, EntryStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Everything a caller needs to instantiate a resolved algorithm.
///
/// The resolver never constructs the implementation itself; the caller
/// dereferences the locator with whatever loading mechanism it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDescriptor {
    implementation: ImplementationRef,
    args: ArgMap,
    source: EntrySource,
}

impl ResolvedDescriptor {
    /// Returns the opaque implementation locator.
    #[must_use]
    pub const fn implementation(&self) -> &ImplementationRef {
        &self.implementation
    }

    /// Returns the merged instantiation arguments (entry defaults underneath
    /// validated caller arguments).
    #[must_use]
    pub const fn args(&self) -> &ArgMap {
        &self.args
    }

    /// Returns the provenance of the resolved entry.
    #[must_use]
    pub const fn source(&self) -> &EntrySource {
        &self.source
    }
}

/// Errors returned while resolving an algorithm reference.
///
/// All variants are recoverable per-call: a failed resolution leaves the
/// registry untouched and the caller may fall back or re-prompt.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// No entry is registered under the requested category and name.
    #[error("no {category} registered under name '{name}'")]
    UnknownAlgorithm {
        /// Requested category.
        category: Category,
        /// Requested name, verbatim as supplied.
        name: String,
    },

    /// The entry takes no configuration but arguments were supplied.
    #[error("{category} '{name}' does not accept arguments")]
    ArgsNotAccepted {
        /// Category of the entry.
        category: Category,
        /// Name of the entry.
        name: AlgorithmName,
    },

    /// The entry's validator rejected the supplied arguments.
    #[error("invalid arguments for {category} '{name}': {detail}")]
    InvalidArguments {
        /// Category of the entry.
        category: Category,
        /// Name of the entry.
        name: AlgorithmName,
        /// Validator-supplied rejection detail.
        detail: ArgumentRejection,
    },

    /// The underlying entry store failed.
    #[error(transparent)]
    Store(#[from] EntryStoreError),
}

/// Resolves registered algorithm names into instantiation descriptors.
///
/// Resolution is a pure function of store state and inputs: identical inputs
/// against an unchanged store always yield an identical descriptor, so
/// callers may repeat a resolution on retry.
#[derive(Clone)]
pub struct AlgorithmResolver<S>
where
    S: EntryStore,
{
    store: Arc<S>,
}

impl<S> AlgorithmResolver<S>
where
    S: EntryStore,
{
    /// Creates a resolver over the given entry store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a `(category, name, raw arguments)` triple.
    ///
    /// Looks up the entry, checks the accepts-arguments flag, runs the bound
    /// validator if any, merges entry defaults under the (possibly
    /// normalised) caller arguments, and returns the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownAlgorithm`] when no entry exists
    /// under the key (a name that fails syntactic validation can never have
    /// been registered and maps to the same absence),
    /// [`ResolutionError::ArgsNotAccepted`] when the entry takes no
    /// configuration yet `raw_args` is non-empty,
    /// [`ResolutionError::InvalidArguments`] when the entry's validator
    /// rejects the arguments, and [`ResolutionError::Store`] on storage
    /// faults.
    pub async fn resolve(
        &self,
        category: Category,
        name: &str,
        raw_args: ArgMap,
    ) -> Result<ResolvedDescriptor, ResolutionError> {
        let Ok(algorithm_name) = AlgorithmName::new(name) else {
            return Err(ResolutionError::UnknownAlgorithm {
                category,
                name: name.to_owned(),
            });
        };

        let entry = self
            .store
            .lookup(category, &algorithm_name)
            .await?
            .ok_or_else(|| ResolutionError::UnknownAlgorithm {
                category,
                name: name.to_owned(),
            })?;

        if !entry.accepts_args() && !raw_args.is_empty() {
            return Err(ResolutionError::ArgsNotAccepted {
                category,
                name: algorithm_name,
            });
        }

        let validated_args = run_validator(&entry, category, &algorithm_name, raw_args)?;
        let merged = merge_args(entry.default_args(), validated_args);

        Ok(ResolvedDescriptor {
            implementation: entry.implementation().clone(),
            args: merged,
            source: entry.source().clone(),
        })
    }
}

/// Runs the entry's validator binding, if present, over the raw arguments.
///
/// The binding runs even on an empty mapping so a validator may demand
/// required keys. Its outcome is treated as opaque: unchanged keeps the raw
/// arguments, normalised replaces them, rejection is propagated with the
/// validator's detail verbatim.
fn run_validator(
    entry: &AlgorithmEntry,
    category: Category,
    name: &AlgorithmName,
    raw_args: ArgMap,
) -> Result<ArgMap, ResolutionError> {
    let Some(binding) = entry.validator() else {
        return Ok(raw_args);
    };

    match binding.validate(&raw_args) {
        Ok(ValidationOutcome::Unchanged) => Ok(raw_args),
        Ok(ValidationOutcome::Normalized(normalized)) => Ok(normalized),
        Err(detail) => Err(ResolutionError::InvalidArguments {
            category,
            name: name.clone(),
            detail,
        }),
    }
}
