//! Algodex: builtin algorithm capability registry for hyperparameter
//! optimisation platforms.
//!
//! This crate provides the catalog through which a tuning platform advertises
//! its pluggable algorithm implementations, namely search strategies
//! (tuners), early-stopping judges (assessors), and multi-fidelity
//! schedulers (advisors), under short stable names, and resolves those names
//! together with caller-supplied arguments into validated instantiation
//! descriptors.
//!
//! # Architecture
//!
//! Algodex follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   builtin argument validators)
//!
//! # Modules
//!
//! - [`registry`]: Entry store, argument validation, name resolution, and
//!   catalog bulk-loading

pub mod registry;
