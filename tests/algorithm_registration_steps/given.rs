//! Given steps for algorithm registration BDD scenarios.

use super::world::{RegistryWorld, run_async, tuner_request};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty algorithm registry")]
fn an_empty_registry(world: &mut RegistryWorld) {
    let _ = world;
}

#[given(r#"a registered tuner named "{name}" backed by "{implementation}""#)]
fn a_registered_tuner(
    world: &mut RegistryWorld,
    name: String,
    implementation: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.register(tuner_request(&name, &implementation)))
        .wrap_err("register tuner for scenario")?;
    Ok(())
}
