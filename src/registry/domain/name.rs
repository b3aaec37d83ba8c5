//! Validated algorithm entry name.

use super::RegistryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an algorithm name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated, case-sensitive algorithm identifier.
///
/// Algorithm names are the short stable lookup keys a platform advertises
/// for its algorithm implementations (e.g. `TPE`, `BOHB`, `BatchTuner`).
/// Case is preserved: `TPE` and `tpe` are distinct names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmName(String);

impl AlgorithmName {
    /// Creates a validated algorithm name.
    ///
    /// The input is trimmed. Only characters in `[A-Za-z0-9_-]` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyAlgorithmName`] when the value is
    /// empty after trimming, [`RegistryDomainError::InvalidAlgorithmName`]
    /// when it contains characters outside `[A-Za-z0-9_-]`, or
    /// [`RegistryDomainError::AlgorithmNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let raw = value.into();
        let trimmed = raw.trim().to_owned();

        if trimmed.is_empty() {
            return Err(RegistryDomainError::EmptyAlgorithmName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(RegistryDomainError::AlgorithmNameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !is_valid {
            return Err(RegistryDomainError::InvalidAlgorithmName(raw));
        }

        Ok(Self(trimmed))
    }

    /// Returns the algorithm name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AlgorithmName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
