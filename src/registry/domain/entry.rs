//! Registered algorithm entry aggregate root.

use super::{
    AlgorithmName, ArgMap, Category, EntrySource, ImplementationRef, RegistryDomainError,
    ValidatorBinding,
};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A registered `(category, name)` → implementation record.
///
/// Entries are created either by the catalog bulk-loader at startup or by
/// explicit registration calls during process lifetime. The registry stores
/// and hands them out but never dereferences the implementation locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmEntry {
    category: Category,
    name: AlgorithmName,
    implementation: ImplementationRef,
    validator: Option<ValidatorBinding>,
    default_args: ArgMap,
    accepts_args: bool,
    source: EntrySource,
    registered_at: DateTime<Utc>,
}

impl AlgorithmEntry {
    /// Creates an entry that accepts arguments, with no defaults and no
    /// validator.
    #[must_use]
    pub fn new(
        category: Category,
        name: AlgorithmName,
        implementation: ImplementationRef,
        source: EntrySource,
        clock: &impl Clock,
    ) -> Self {
        Self {
            category,
            name,
            implementation,
            validator: None,
            default_args: ArgMap::new(),
            accepts_args: true,
            source,
            registered_at: clock.utc(),
        }
    }

    /// Sets entry-level default arguments, merged under caller arguments at
    /// resolution time.
    #[must_use]
    pub fn with_default_args(mut self, default_args: ArgMap) -> Self {
        self.default_args = default_args;
        self
    }

    /// Binds an argument validation routine.
    #[must_use]
    pub fn with_validator(mut self, validator: ValidatorBinding) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Marks the entry as taking no configuration at all.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::DefaultArgsWithArgsDisabled`] when
    /// default arguments are already declared, or
    /// [`RegistryDomainError::ValidatorWithArgsDisabled`] when a validator is
    /// already bound; defaulting and validation are meaningless with no
    /// arguments.
    pub fn args_disabled(mut self) -> Result<Self, RegistryDomainError> {
        self.accepts_args = false;
        self.validate()?;
        Ok(self)
    }

    /// Re-checks the cross-field invariants.
    ///
    /// Builder construction cannot normally violate them, but stores call
    /// this before insertion so that any hand-assembled entry is rejected
    /// with a typed error rather than silently stored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError`] when the entry accepts no arguments
    /// yet declares default arguments or a validator.
    pub fn validate(&self) -> Result<(), RegistryDomainError> {
        if !self.accepts_args {
            if !self.default_args.is_empty() {
                return Err(RegistryDomainError::DefaultArgsWithArgsDisabled(
                    self.name.as_str().to_owned(),
                ));
            }
            if self.validator.is_some() {
                return Err(RegistryDomainError::ValidatorWithArgsDisabled(
                    self.name.as_str().to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Returns the extension point this entry plugs into.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the entry name.
    #[must_use]
    pub const fn name(&self) -> &AlgorithmName {
        &self.name
    }

    /// Returns the opaque implementation locator.
    #[must_use]
    pub const fn implementation(&self) -> &ImplementationRef {
        &self.implementation
    }

    /// Returns the bound argument validator, if any.
    #[must_use]
    pub const fn validator(&self) -> Option<&ValidatorBinding> {
        self.validator.as_ref()
    }

    /// Returns the entry-level default arguments.
    #[must_use]
    pub const fn default_args(&self) -> &ArgMap {
        &self.default_args
    }

    /// Returns `false` when the implementation takes no configuration.
    #[must_use]
    pub const fn accepts_args(&self) -> bool {
        self.accepts_args
    }

    /// Returns the provenance tag.
    #[must_use]
    pub const fn source(&self) -> &EntrySource {
        &self.source
    }

    /// Returns the registration timestamp (diagnostics only).
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
