//! Domain model for the algorithm capability registry.
//!
//! The registry domain models algorithm categories, validated entry names,
//! opaque implementation and validator locators, provenance tags, and the
//! registered entry aggregate. Infrastructure concerns remain outside this
//! boundary.

mod args;
mod category;
mod entry;
mod error;
mod name;
mod refs;
mod source;
mod validator;

pub use args::{ArgMap, merge_args};
pub use category::Category;
pub use entry::AlgorithmEntry;
pub use error::{ParseCategoryError, RegistryDomainError};
pub use name::AlgorithmName;
pub use refs::{ImplementationRef, ValidatorRef};
pub use source::EntrySource;
pub use validator::{ArgumentRejection, ArgumentValidator, ValidationOutcome, ValidatorBinding};
