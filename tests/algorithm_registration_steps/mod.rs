//! Step definitions for algorithm registration BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
