//! Algorithm argument mappings and the default-merge rule.

use serde_json::{Map, Value};

/// Mapping from argument name to JSON value.
pub type ArgMap = Map<String, Value>;

/// Merges entry defaults under caller-supplied arguments.
///
/// `defaults` form the base layer; every key in `explicit` overrides the
/// default of the same name, and keys present only in `defaults` pass
/// through unchanged.
#[must_use]
pub fn merge_args(defaults: &ArgMap, explicit: ArgMap) -> ArgMap {
    let mut merged = defaults.clone();
    for (key, value) in explicit {
        merged.insert(key, value);
    }
    merged
}
