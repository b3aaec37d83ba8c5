//! Declarative catalog parsing and bulk-loading of builtin algorithms.
//!
//! The catalog is a JSON document with top-level `tuners`, `assessors`, and
//! `advisors` arrays. It is parsed once at startup and loaded into the entry
//! store as a single all-or-nothing batch; a broken catalog is fatal for the
//! initialising process, since no algorithm could ever resolve against a
//! partially loaded roster.

use crate::registry::{
    domain::{
        AlgorithmEntry, AlgorithmName, ArgMap, ArgumentValidator, Category, EntrySource,
        ImplementationRef, RegistryDomainError, ValidatorBinding, ValidatorRef,
    },
    ports::{EntryStore, EntryStoreError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::registry::adapters::validators::OptimizeModeValidator;

/// The catalog of builtin algorithms shipped with the platform.
const BUILTIN_CATALOG: &str = include_str!("builtin_catalog.json");

/// Locator under which [`OptimizeModeValidator`] is bound for builtins.
const OPTIMIZE_MODE_VALIDATOR: &str = "optimize_mode_validator";

/// One catalog record, in the declarative document's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Short stable entry name (`builtinName`).
    pub builtin_name: String,
    /// Fully-qualified implementation locator (`className`).
    pub class_name: String,
    /// Optional validator locator (`classArgsValidator`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_args_validator: Option<String>,
    /// Optional entry-level default arguments (`classArgs`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_args: Option<ArgMap>,
    /// Whether the implementation takes configuration (`acceptClassArgs`,
    /// default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_class_args: Option<bool>,
    /// Optional provenance tag; missing means builtin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The declarative catalog document: ordered category blocks of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Hyperparameter search strategies.
    #[serde(default)]
    pub tuners: Vec<CatalogRecord>,
    /// Early-stopping judges.
    #[serde(default)]
    pub assessors: Vec<CatalogRecord>,
    /// Multi-fidelity schedulers.
    #[serde(default)]
    pub advisors: Vec<CatalogRecord>,
}

impl CatalogDocument {
    /// Parses a catalog document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the document is malformed.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Returns the catalog of builtin algorithms shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the embedded document is
    /// malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Iterates all records with their category, in catalog order.
    fn records(&self) -> impl Iterator<Item = (Category, &CatalogRecord)> {
        let tuners = self.tuners.iter().map(|r| (Category::Tuner, r));
        let assessors = self.assessors.iter().map(|r| (Category::Assessor, r));
        let advisors = self.advisors.iter().map(|r| (Category::Advisor, r));
        tuners.chain(assessors).chain(advisors)
    }
}

/// Errors returned while parsing or bulk-loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid JSON in the catalog shape.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record names a validator locator with no registered binding.
    #[error("catalog entry '{name}' references unbound validator '{reference}'")]
    UnboundValidator {
        /// Name of the offending record.
        name: String,
        /// The unbound locator.
        reference: ValidatorRef,
    },

    /// A record fails domain validation (e.g. default arguments declared on
    /// an entry that accepts none).
    #[error(transparent)]
    Domain(#[from] RegistryDomainError),

    /// The entry store rejected the batch.
    #[error(transparent)]
    Store(#[from] EntryStoreError),
}

/// Table resolving validator locators to invocable routines.
///
/// The catalog names validators by locator string; the hosting platform
/// registers the corresponding routines here before loading. An unbound
/// locator aborts the load rather than deferring the failure to resolve
/// time.
#[derive(Clone, Default)]
pub struct ValidatorBindings {
    bindings: HashMap<ValidatorRef, Arc<dyn ArgumentValidator>>,
}

impl ValidatorBindings {
    /// Creates an empty bindings table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bindings used by the builtin catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyValidatorRef`] only if a builtin
    /// locator constant were empty; in practice this cannot fail.
    pub fn builtin() -> Result<Self, RegistryDomainError> {
        let mut bindings = Self::new();
        bindings.bind(
            ValidatorRef::new(OPTIMIZE_MODE_VALIDATOR)?,
            Arc::new(OptimizeModeValidator::new()),
        );
        Ok(bindings)
    }

    /// Registers a validator routine under a locator, replacing any previous
    /// binding for that locator.
    pub fn bind(&mut self, reference: ValidatorRef, validator: Arc<dyn ArgumentValidator>) {
        self.bindings.insert(reference, validator);
    }

    /// Looks up the binding for a locator.
    #[must_use]
    pub fn get(&self, reference: &ValidatorRef) -> Option<ValidatorBinding> {
        self.bindings
            .get(reference)
            .map(|validator| ValidatorBinding::new(reference.clone(), Arc::clone(validator)))
    }
}

impl fmt::Debug for ValidatorBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBindings")
            .field("locators", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Bulk-loads catalog documents into an entry store.
#[derive(Clone)]
pub struct CatalogLoader<S, C>
where
    S: EntryStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    bindings: ValidatorBindings,
}

impl<S, C> CatalogLoader<S, C>
where
    S: EntryStore,
    C: Clock + Send + Sync,
{
    /// Creates a loader over the given store and validator bindings.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, bindings: ValidatorBindings) -> Self {
        Self {
            store,
            clock,
            bindings,
        }
    }

    /// Loads a parsed catalog document as one atomic batch.
    ///
    /// Every record converts to a domain entry before a single store call,
    /// so a conversion failure commits nothing. Returns the number of
    /// entries loaded.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Domain`] or
    /// [`CatalogError::UnboundValidator`] when a record is malformed, and
    /// [`CatalogError::Store`] when the batch collides with itself or with
    /// pre-existing entries.
    pub async fn load(&self, document: &CatalogDocument) -> Result<usize, CatalogError> {
        let mut entries = Vec::new();
        for (category, record) in document.records() {
            entries.push(self.convert(category, record)?);
        }
        let count = entries.len();
        self.store.load(entries).await?;
        Ok(count)
    }

    /// Parses and loads a JSON catalog document.
    ///
    /// # Errors
    ///
    /// As [`CatalogLoader::load`], plus [`CatalogError::Parse`] for a
    /// malformed document.
    pub async fn load_json(&self, document: &str) -> Result<usize, CatalogError> {
        let parsed = CatalogDocument::from_json(document)?;
        self.load(&parsed).await
    }

    /// Loads the builtin catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// As [`CatalogLoader::load`].
    pub async fn load_builtin(&self) -> Result<usize, CatalogError> {
        let document = CatalogDocument::builtin()?;
        self.load(&document).await
    }

    /// Converts one catalog record into a domain entry, applying the
    /// category-block defaulting rules.
    fn convert(
        &self,
        category: Category,
        record: &CatalogRecord,
    ) -> Result<AlgorithmEntry, CatalogError> {
        let name = AlgorithmName::new(record.builtin_name.clone())?;
        let implementation = ImplementationRef::new(record.class_name.clone())?;
        let source = record
            .source
            .clone()
            .map_or(EntrySource::Builtin, EntrySource::from);

        let mut entry = AlgorithmEntry::new(category, name, implementation, source, &*self.clock);

        if let Some(args) = &record.class_args {
            entry = entry.with_default_args(args.clone());
        }

        if let Some(locator) = &record.class_args_validator {
            let reference = ValidatorRef::new(locator.clone())?;
            let binding =
                self.bindings
                    .get(&reference)
                    .ok_or_else(|| CatalogError::UnboundValidator {
                        name: record.builtin_name.clone(),
                        reference,
                    })?;
            entry = entry.with_validator(binding);
        }

        // Explicit acceptClassArgs: false wins; non-empty defaults or a
        // validator alongside it is a load-time error, not silently dropped.
        if record.accept_class_args == Some(false) {
            entry = entry.args_disabled()?;
        }

        Ok(entry)
    }
}
