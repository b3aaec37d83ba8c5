//! Unit tests for the algorithm capability registry.

mod service_tests;

use crate::registry::domain::ArgMap;

/// Builds an [`ArgMap`] from a `serde_json::json!` object literal.
pub fn args(value: serde_json::Value) -> ArgMap {
    value
        .as_object()
        .cloned()
        .unwrap_or_else(|| panic!("argument literal must be a JSON object: {value}"))
}
