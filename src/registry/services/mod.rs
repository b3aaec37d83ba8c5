//! Orchestration services for the algorithm capability registry.

pub mod catalog;
pub mod registration;
pub mod resolver;

pub use catalog::{CatalogDocument, CatalogError, CatalogLoader, CatalogRecord, ValidatorBindings};
pub use registration::{
    AlgorithmListing, RegisterAlgorithmRequest, RegistryService, RegistryServiceError,
    RegistryServiceResult,
};
pub use resolver::{AlgorithmResolver, ResolutionError, ResolvedDescriptor};
