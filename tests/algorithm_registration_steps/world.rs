//! Shared world state for algorithm registration BDD scenarios.

use std::sync::Arc;

use algodex::registry::{
    adapters::memory::InMemoryEntryStore,
    domain::AlgorithmEntry,
    services::{
        AlgorithmListing, AlgorithmResolver, RegisterAlgorithmRequest, RegistryService,
        RegistryServiceError, ResolvedDescriptor, ResolutionError,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRegistryService = RegistryService<InMemoryEntryStore, DefaultClock>;

/// Resolver type used by the BDD world.
pub type TestResolver = AlgorithmResolver<InMemoryEntryStore>;

/// Scenario world for algorithm registration behaviour tests.
pub struct RegistryWorld {
    /// The registration service under test.
    pub service: TestRegistryService,
    /// Resolver over the same store.
    pub resolver: TestResolver,
    /// Result of the last registration attempt.
    pub last_register_result: Option<Result<AlgorithmEntry, RegistryServiceError>>,
    /// Result of the last resolution attempt.
    pub last_resolve_result: Option<Result<ResolvedDescriptor, ResolutionError>>,
    /// Result of the last listing call.
    pub last_listing: Option<Vec<AlgorithmListing>>,
}

impl RegistryWorld {
    /// Creates a world over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryEntryStore::new());
        let service = RegistryService::new(Arc::clone(&store), Arc::new(DefaultClock));
        let resolver = AlgorithmResolver::new(store);
        Self {
            service,
            resolver,
            last_register_result: None,
            last_resolve_result: None,
            last_listing: None,
        }
    }
}

impl Default for RegistryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a tuner registration request from a name and implementation
/// locator.
pub fn tuner_request(name: &str, implementation: &str) -> RegisterAlgorithmRequest {
    RegisterAlgorithmRequest::new(
        algodex::registry::domain::Category::Tuner,
        name,
        implementation,
    )
}
