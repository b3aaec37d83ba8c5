//! Behaviour tests for algorithm registration and resolution.

mod algorithm_registration_steps;

use algorithm_registration_steps::world::{RegistryWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/algorithm_registration.feature",
    name = "Register a custom tuner and resolve it"
)]
#[tokio::test(flavor = "multi_thread")]
async fn register_and_resolve(world: RegistryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/algorithm_registration.feature",
    name = "Reject a duplicate tuner name"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_duplicate_name(world: RegistryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/algorithm_registration.feature",
    name = "Overwrite a registered tuner"
)]
#[tokio::test(flavor = "multi_thread")]
async fn overwrite_registered_tuner(world: RegistryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/algorithm_registration.feature",
    name = "List tuners in registration order"
)]
#[tokio::test(flavor = "multi_thread")]
async fn list_in_registration_order(world: RegistryWorld) {
    let _ = world;
}
