//! When steps for algorithm registration BDD scenarios.

use super::world::{RegistryWorld, run_async, tuner_request};
use rstest_bdd_macros::when;

#[when(r#"I register a tuner named "{name}" backed by "{implementation}""#)]
fn register_tuner(world: &mut RegistryWorld, name: String, implementation: String) {
    let result = run_async(world.service.register(tuner_request(&name, &implementation)));
    world.last_register_result = Some(result);
}

#[when(r#"I overwrite the tuner "{name}" with implementation "{implementation}""#)]
fn overwrite_tuner(world: &mut RegistryWorld, name: String, implementation: String) {
    let result = run_async(
        world
            .service
            .register(tuner_request(&name, &implementation).overwriting()),
    );
    world.last_register_result = Some(result);
}
