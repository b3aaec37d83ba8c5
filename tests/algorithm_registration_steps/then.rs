//! Then steps for algorithm registration BDD scenarios.

use super::world::{RegistryWorld, run_async};
use algodex::registry::{
    domain::{ArgMap, Category},
    ports::EntryStoreError,
    services::RegistryServiceError,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"resolving tuner "{name}" yields implementation "{implementation}""#)]
fn resolving_yields_implementation(
    world: &mut RegistryWorld,
    name: String,
    implementation: String,
) -> Result<(), eyre::Report> {
    let descriptor = run_async(world.resolver.resolve(Category::Tuner, &name, ArgMap::new()))
        .wrap_err("resolve tuner for scenario")?;
    if descriptor.implementation().as_str() != implementation {
        return Err(eyre::eyre!(
            "expected implementation '{implementation}', got '{}'",
            descriptor.implementation()
        ));
    }
    world.last_resolve_result = Some(Ok(descriptor));
    Ok(())
}

#[then("the registration fails with a duplicate key error")]
fn registration_failed_with_duplicate_key(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    match world.last_register_result.take() {
        Some(Err(RegistryServiceError::Store(EntryStoreError::DuplicateKey { .. }))) => Ok(()),
        Some(Err(other)) => Err(eyre::eyre!("expected duplicate key error, got: {other}")),
        Some(Ok(entry)) => Err(eyre::eyre!(
            "expected duplicate key error, but '{}' was registered",
            entry.name()
        )),
        None => Err(eyre::eyre!("no registration attempt in scenario world")),
    }
}

#[then(r#"listing tuners returns {count:usize} entries in order "{first}", "{second}""#)]
fn listing_returns_entries_in_order(
    world: &mut RegistryWorld,
    count: usize,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list(Category::Tuner))
        .wrap_err("list tuners for scenario")?;
    if listed.len() != count {
        return Err(eyre::eyre!("expected {count} entries, got {}", listed.len()));
    }
    let names: Vec<&str> = listed.iter().map(|row| row.name().as_str()).collect();
    if names != vec![first.as_str(), second.as_str()] {
        return Err(eyre::eyre!("unexpected listing order: {names:?}"));
    }
    world.last_listing = Some(listed);
    Ok(())
}
