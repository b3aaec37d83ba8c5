//! Algorithm capability registry: entry storage, argument validation, and
//! name resolution for pluggable tuning algorithms.
//!
//! A declarative catalog of builtin algorithms is bulk-loaded at startup;
//! callers may additionally register custom algorithms at runtime. At
//! job-submission time a `(category, name, raw arguments)` triple is resolved
//! into a validated instantiation descriptor. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
