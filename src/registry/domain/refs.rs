//! Opaque locator newtypes for implementations and validators.
//!
//! The registry never dereferences these locators: they are carried through
//! to the caller, which owns whatever dynamic-loading mechanism turns a
//! locator into a constructible object. Keeping them opaque is what lets the
//! registry stay free of any implementation-loading machinery.

use super::RegistryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified reference to a constructible algorithm implementation
/// (module path plus symbol, or an equivalent locator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementationRef(String);

impl ImplementationRef {
    /// Creates a validated implementation locator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyImplementationRef`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(RegistryDomainError::EmptyImplementationRef);
        }
        Ok(Self(trimmed))
    }

    /// Returns the locator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ImplementationRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ImplementationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference naming an argument validation routine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorRef(String);

impl ValidatorRef {
    /// Creates a validated validator locator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyValidatorRef`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(RegistryDomainError::EmptyValidatorRef);
        }
        Ok(Self(trimmed))
    }

    /// Returns the locator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatorRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ValidatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
