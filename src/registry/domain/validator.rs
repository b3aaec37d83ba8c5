//! Pluggable argument validation for registered entries.

use super::{ArgMap, ValidatorRef};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Successful outcome of an argument validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The raw arguments were accepted as-is.
    Unchanged,
    /// The raw arguments were accepted after normalisation or coercion; the
    /// returned mapping replaces the caller's arguments.
    Normalized(ArgMap),
}

/// Validator-supplied rejection detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ArgumentRejection(String);

impl ArgumentRejection {
    /// Creates a rejection carrying a human-readable detail message.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }

    /// Returns the rejection detail.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.0
    }
}

/// Validation and normalisation routine bound to a registered entry.
///
/// Validators are pluggable, caller-supplied code. The resolver treats the
/// outcome as an opaque three-way result (ok-unchanged / ok-normalised /
/// rejected) and assumes nothing about validator internals.
pub trait ArgumentValidator: Send + Sync {
    /// Checks raw caller arguments, optionally returning a normalised
    /// replacement mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentRejection`] when the arguments are unacceptable;
    /// the detail message is propagated verbatim to the resolving caller.
    fn validate(&self, args: &ArgMap) -> Result<ValidationOutcome, ArgumentRejection>;
}

/// A validator locator paired with its invocable routine.
///
/// The locator is the catalog-facing name of the routine; the [`Arc`]'d
/// trait object is the typed stand-in for whatever reflection-based lookup
/// the hosting platform would otherwise perform. Equality and `Debug` go by
/// locator only, so entries holding bindings stay comparable.
#[derive(Clone)]
pub struct ValidatorBinding {
    reference: ValidatorRef,
    validator: Arc<dyn ArgumentValidator>,
}

impl ValidatorBinding {
    /// Binds a validator routine to its locator.
    #[must_use]
    pub const fn new(reference: ValidatorRef, validator: Arc<dyn ArgumentValidator>) -> Self {
        Self {
            reference,
            validator,
        }
    }

    /// Returns the validator locator.
    #[must_use]
    pub const fn reference(&self) -> &ValidatorRef {
        &self.reference
    }

    /// Runs the bound validation routine.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentRejection`] when the routine rejects the arguments.
    pub fn validate(&self, args: &ArgMap) -> Result<ValidationOutcome, ArgumentRejection> {
        self.validator.validate(args)
    }
}

impl fmt::Debug for ValidatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatorBinding")
            .field(&self.reference)
            .finish()
    }
}

impl PartialEq for ValidatorBinding {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for ValidatorBinding {}
