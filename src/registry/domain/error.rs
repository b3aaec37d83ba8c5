//! Error types for registry domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryDomainError {
    /// The algorithm name is empty after trimming.
    #[error("algorithm name must not be empty")]
    EmptyAlgorithmName,

    /// The algorithm name contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "algorithm name '{0}' contains invalid characters (only alphanumeric, underscores and hyphens allowed)"
    )]
    InvalidAlgorithmName(String),

    /// The algorithm name exceeds the 100-character limit.
    #[error("algorithm name exceeds 100 character limit: {0}")]
    AlgorithmNameTooLong(String),

    /// The implementation locator is empty after trimming.
    #[error("implementation reference must not be empty")]
    EmptyImplementationRef,

    /// The validator locator is empty after trimming.
    #[error("validator reference must not be empty")]
    EmptyValidatorRef,

    /// An entry that accepts no arguments declares default arguments.
    #[error("entry '{0}' declares default arguments but accepts no arguments")]
    DefaultArgsWithArgsDisabled(String),

    /// An entry that accepts no arguments declares a validator.
    #[error("entry '{0}' declares an argument validator but accepts no arguments")]
    ValidatorWithArgsDisabled(String),
}

/// Error returned while parsing an algorithm category label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown algorithm category: {0}")]
pub struct ParseCategoryError(pub String);
